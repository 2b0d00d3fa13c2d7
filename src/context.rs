//! Data directory resolution for promptflow.
//!
//! All persistent state (prompt registry, execution history, optional
//! config) lives under a single data directory. Commands resolve it the
//! same way so they always target the same files regardless of argument
//! order or invocation details:
//!
//! - `$PROMPTFLOW_DIR`, when set, wins.
//! - Otherwise `./.promptflow` relative to the working directory.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PROMPTFLOW_DIR";

/// Default data directory name, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".promptflow";

/// Registry state filename within the data directory.
pub const PROMPTS_FILE: &str = "prompts.json";

/// History state filename within the data directory.
pub const HISTORY_FILE: &str = "history.json";

/// Optional config filename within the data directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Resolved state paths for one invocation.
#[derive(Debug, Clone)]
pub struct DataContext {
    /// The data directory all state files live under.
    pub data_dir: PathBuf,
}

impl DataContext {
    /// Resolve the context from the environment and working directory.
    pub fn resolve() -> Self {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self {
                data_dir: PathBuf::from(dir),
            },
            _ => Self {
                data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            },
        }
    }

    /// Build a context rooted at a specific directory.
    pub fn at<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path to the prompt registry file.
    pub fn prompts_path(&self) -> PathBuf {
        self.data_dir.join(PROMPTS_FILE)
    }

    /// Path to the execution history file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }

    /// Path to the optional config file.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_override_wins() {
        unsafe { env::set_var(DATA_DIR_ENV, "/tmp/pf-test") };
        let ctx = DataContext::resolve();
        unsafe { env::remove_var(DATA_DIR_ENV) };

        assert_eq!(ctx.data_dir, PathBuf::from("/tmp/pf-test"));
        assert_eq!(ctx.prompts_path(), PathBuf::from("/tmp/pf-test/prompts.json"));
    }

    #[test]
    #[serial]
    fn defaults_to_local_directory() {
        unsafe { env::remove_var(DATA_DIR_ENV) };
        let ctx = DataContext::resolve();
        assert_eq!(ctx.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn explicit_root() {
        let ctx = DataContext::at("/somewhere");
        assert_eq!(ctx.history_path(), PathBuf::from("/somewhere/history.json"));
        assert_eq!(ctx.config_path(), PathBuf::from("/somewhere/config.yaml"));
    }
}
