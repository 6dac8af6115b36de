//! XDG Base Directory support.

use std::path::PathBuf;

const APP_DIR: &str = "lexaid";

/// XDG directory paths for lexaid.
#[derive(Debug, Clone)]
pub struct XdgDirs {
    /// Config directory (~/.config/lexaid or XDG_CONFIG_HOME/lexaid)
    pub config: PathBuf,
    /// State directory (~/.local/state/lexaid or XDG_STATE_HOME/lexaid)
    pub state: PathBuf,
}

impl XdgDirs {
    /// Get XDG directories, respecting environment variables.
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            config: Self::resolve("XDG_CONFIG_HOME", home.join(".config")),
            state: Self::resolve("XDG_STATE_HOME", home.join(".local/state")),
        }
    }

    fn resolve(var: &str, fallback: PathBuf) -> PathBuf {
        std::env::var_os(var)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(fallback)
            .join(APP_DIR)
    }

    /// Default settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config.join("settings.json")
    }

    /// Log file for the terminal UI (stdout is owned by the UI).
    pub fn log_file(&self) -> PathBuf {
        self.state.join("lexaid.log")
    }

    /// Ensure the state directory exists.
    pub fn ensure_state_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.state)
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_respects_xdg_vars() {
        let tmp = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", tmp.path().join("cfg"));
        std::env::set_var("XDG_STATE_HOME", tmp.path().join("state"));

        let dirs = XdgDirs::new();
        assert_eq!(dirs.config, tmp.path().join("cfg/lexaid"));
        assert_eq!(dirs.settings_file(), tmp.path().join("cfg/lexaid/settings.json"));
        assert_eq!(dirs.log_file(), tmp.path().join("state/lexaid/lexaid.log"));

        dirs.ensure_state_dir().unwrap();
        assert!(dirs.state.is_dir());

        std::env::remove_var("XDG_CONFIG_HOME");
        std::env::remove_var("XDG_STATE_HOME");
    }

    #[test]
    #[serial]
    fn test_empty_var_falls_back_to_home() {
        std::env::set_var("XDG_STATE_HOME", "");
        let dirs = XdgDirs::new();
        assert!(dirs.state.ends_with(".local/state/lexaid"));
        std::env::remove_var("XDG_STATE_HOME");
    }
}
