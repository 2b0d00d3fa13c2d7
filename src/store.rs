//! JSON persistence for the prompt registry and execution history.
//!
//! The engine itself does no I/O; the CLI layer loads state here before an
//! operation and saves it after. Files are pretty-printed JSON, written
//! atomically (see [`crate::fs`]). A missing file deserializes to empty
//! state so first runs need no init step.

use crate::context::DataContext;
use crate::engine::PromptRegistry;
use crate::error::{PromptFlowError, Result};
use crate::fs::atomic_write_file;
use crate::history::ExecutionHistory;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load the prompt registry, empty if no file exists yet.
pub fn load_registry(ctx: &DataContext) -> Result<PromptRegistry> {
    load_json(&ctx.prompts_path())
}

/// Persist the prompt registry.
pub fn save_registry(ctx: &DataContext, registry: &PromptRegistry) -> Result<()> {
    save_json(&ctx.prompts_path(), registry)
}

/// Load the execution history, empty if no file exists yet.
pub fn load_history(ctx: &DataContext) -> Result<ExecutionHistory> {
    load_json(&ctx.history_path())
}

/// Persist the execution history.
pub fn save_history(ctx: &DataContext, history: &ExecutionHistory) -> Result<()> {
    save_json(&ctx.history_path(), history)
}

fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let text = fs::read_to_string(path).map_err(|e| {
        PromptFlowError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    serde_json::from_str(&text).map_err(|e| {
        PromptFlowError::UserError(format!("failed to parse '{}': {}", path.display(), e))
    })
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| PromptFlowError::UserError(format!("failed to serialize state: {}", e)))?;
    atomic_write_file(path, &json)
}
