//! Implementation of the `promptflow list` command.

use crate::cli::ListArgs;
use crate::context::DataContext;
use crate::error::Result;
use crate::store;

/// Execute the `promptflow list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let ctx = DataContext::resolve();
    let registry = store::load_registry(&ctx)?;

    let mut prompts: Vec<_> = registry
        .all()
        .iter()
        .filter(|p| !args.workflows || p.is_workflow())
        .collect();
    prompts.sort_by(|a, b| a.name.cmp(&b.name));

    if prompts.is_empty() {
        println!("No prompts.");
        return Ok(());
    }

    for prompt in prompts {
        let kind = if prompt.is_workflow() {
            "workflow"
        } else {
            "prompt  "
        };
        let variables = prompt.variables();
        println!(
            "{}  {}  ({} variable{})",
            kind,
            prompt.name,
            variables.len(),
            if variables.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}
