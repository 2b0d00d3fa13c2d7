//! Implementation of the `promptflow remove` command.

use crate::cli::RemoveArgs;
use crate::context::DataContext;
use crate::error::{PromptFlowError, Result};
use crate::store;

/// Execute the `promptflow remove` command.
///
/// Removal is unconditional: prompts that called the removed prompt keep
/// the dangling call, which stays literal at execution time.
pub fn cmd_remove(args: RemoveArgs) -> Result<()> {
    let ctx = DataContext::resolve();
    let mut registry = store::load_registry(&ctx)?;

    let id = registry
        .find_by_name(&args.name)
        .map(|p| p.id)
        .ok_or_else(|| PromptFlowError::PromptNotFound(args.name.clone()))?;

    registry.remove(id);
    store::save_registry(&ctx, &registry)?;

    println!("Removed prompt '{}'", args.name);
    Ok(())
}
