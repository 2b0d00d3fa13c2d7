//! Implementation of the `promptflow edit` command.

use crate::cli::EditArgs;
use crate::context::DataContext;
use crate::error::{PromptFlowError, Result};
use crate::store;

/// Execute the `promptflow edit` command.
///
/// Updates a prompt's name and/or content; unspecified parts are kept.
/// Renaming onto a different prompt's name fails without mutating state.
pub fn cmd_edit(args: EditArgs) -> Result<()> {
    if args.rename.is_none() && args.content.is_none() {
        return Err(PromptFlowError::UserError(
            "nothing to edit: pass --rename and/or --content".to_string(),
        ));
    }

    let ctx = DataContext::resolve();
    let mut registry = store::load_registry(&ctx)?;

    let prompt = registry
        .find_by_name(&args.name)
        .ok_or_else(|| PromptFlowError::PromptNotFound(args.name.clone()))?;
    let id = prompt.id;
    let new_name = args.rename.unwrap_or_else(|| prompt.name.clone());
    let new_content = args.content.unwrap_or_else(|| prompt.content.clone());

    registry.update(id, &new_name, &new_content)?;
    store::save_registry(&ctx, &registry)?;

    println!("Updated prompt '{}' (id {})", new_name, id);
    Ok(())
}
