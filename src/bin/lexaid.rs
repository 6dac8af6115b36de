//! lexaid - terminal legal-information chat.
//!
//! Launches the chat UI, or answers a single question with `--ask`.

use std::path::PathBuf;

use clap::Parser;
use lexaid::runner::{run_ask, run_tui, AppConfig};

/// lexaid - general legal information in your terminal
#[derive(Parser, Debug)]
#[command(name = "lexaid")]
#[command(version, about, long_about = None)]
struct Args {
    /// Answer a single question and exit
    #[arg(short = 'a', long, value_name = "QUESTION")]
    ask: Option<String>,

    /// Print the --ask exchange as JSON
    #[arg(long, requires = "ask")]
    json: bool,

    /// Delay before answers appear, in milliseconds
    #[arg(long, env = "LEXAID_RESPONSE_DELAY_MS", value_name = "MS")]
    delay_ms: Option<u64>,

    /// Settings file (defaults to $XDG_CONFIG_HOME/lexaid/settings.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose (trace-level) logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        AppConfig {
            debug: args.debug,
            verbose: args.verbose,
            settings_path: args.config.clone(),
            response_delay_ms: args.delay_ms,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::from(&args);

    match &args.ask {
        Some(question) => run_ask(config, question, args.json),
        None => run_tui(config),
    }
}
