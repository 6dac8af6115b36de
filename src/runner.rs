//! Application Runner Module
//!
//! Entry points shared by the binary: the interactive terminal UI and the
//! one-shot `--ask` mode.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::ChatMessage;
use crate::config::{Settings, XdgDirs};
use crate::legal::Responder;

/// Runtime configuration collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
    /// Settings file override
    pub settings_path: Option<PathBuf>,
    /// Response delay override in milliseconds
    pub response_delay_ms: Option<u64>,
}

impl AppConfig {
    fn log_filter(&self, default: &str) -> EnvFilter {
        let level = if self.verbose {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            default
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    /// Settings from file with command-line overrides applied.
    pub fn load_settings(&self, dirs: &XdgDirs) -> anyhow::Result<Settings> {
        let path = self
            .settings_path
            .clone()
            .unwrap_or_else(|| dirs.settings_file());
        let mut settings = Settings::load(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?;
        if let Some(delay) = self.response_delay_ms {
            settings.response_delay_ms = delay;
        }
        Ok(settings)
    }
}

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI feature is not enabled or if the TUI fails to start.
#[cfg(feature = "tui")]
pub fn run_tui(config: AppConfig) -> anyhow::Result<()> {
    use std::fs::File;

    let dirs = XdgDirs::new();
    dirs.ensure_state_dir()
        .with_context(|| format!("creating {}", dirs.state.display()))?;

    // stdout belongs to the terminal UI, so logs go to a file
    let log_path = dirs.log_file();
    let log_file = File::create(&log_path)
        .with_context(|| format!("creating log file {}", log_path.display()))?;
    tracing_subscriber::registry()
        .with(config.log_filter("info,lexaid=debug"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(log_file)),
        )
        .init();

    let settings = config.load_settings(&dirs)?;
    tracing::info!(?settings, "Starting terminal UI");

    let runtime = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    runtime.block_on(crate::tui::run(settings))
}

#[cfg(not(feature = "tui"))]
pub fn run_tui(_config: AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("TUI feature not enabled. Recompile with --features tui")
}

/// Answer a single question on stdout and exit.
pub fn run_ask(config: AppConfig, question: &str, json: bool) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(config.log_filter("warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ask(&Responder::default(), question, json, &mut out)
}

/// Write the answer for `question` to `out`, either as plain text or as a
/// JSON array holding the question and answer messages.
pub fn ask<W: Write>(
    responder: &Responder,
    question: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("question must not be empty");
    }

    let answer = responder.respond(question);
    if json {
        let transcript = [ChatMessage::user(question), ChatMessage::assistant(answer)];
        serde_json::to_writer_pretty(&mut *out, &transcript)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{answer}")?;
    }
    Ok(())
}
