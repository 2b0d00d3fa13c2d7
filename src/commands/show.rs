//! Implementation of the `promptflow show` command.

use crate::cli::ShowArgs;
use crate::context::DataContext;
use crate::error::{PromptFlowError, Result};
use crate::store;

/// Execute the `promptflow show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let ctx = DataContext::resolve();
    let registry = store::load_registry(&ctx)?;

    let prompt = registry
        .find_by_name(&args.name)
        .ok_or_else(|| PromptFlowError::PromptNotFound(args.name.clone()))?;

    println!("name:      {}", prompt.name);
    println!("id:        {}", prompt.id);
    println!(
        "kind:      {}",
        if prompt.is_workflow() {
            "workflow"
        } else {
            "prompt"
        }
    );
    let variables = prompt.variables();
    println!(
        "variables: {}",
        if variables.is_empty() {
            "(none)".to_string()
        } else {
            variables.join(", ")
        }
    );
    println!("created:   {}", prompt.created_at.to_rfc3339());
    println!("updated:   {}", prompt.updated_at.to_rfc3339());
    println!();
    println!("{}", prompt.content);
    Ok(())
}
