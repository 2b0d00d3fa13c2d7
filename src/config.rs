//! Configuration for promptflow.
//!
//! An optional `config.yaml` in the data directory tunes behavior. Parsing
//! is forward-compatible: unknown fields are ignored and every field has a
//! default, so an empty or missing file yields the default config.

use crate::context::DataContext;
use crate::error::{PromptFlowError, Result};
use crate::history::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;

/// Tunable settings loaded from `config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of execution records retained in history.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

impl Config {
    /// Parse a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| PromptFlowError::UserError(format!("invalid config: {}", e)))
    }

    /// Load the config for a data context, defaulting when the file is
    /// absent.
    pub fn load(ctx: &DataContext) -> Result<Self> {
        let path = ctx.config_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(&path).map_err(|e| {
            PromptFlowError::UserError(format!(
                "failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&yaml)
    }
}
