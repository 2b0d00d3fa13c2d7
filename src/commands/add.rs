//! Implementation of the `promptflow add` command.

use crate::cli::AddArgs;
use crate::context::DataContext;
use crate::error::Result;
use crate::store;

/// Execute the `promptflow add` command.
///
/// Creates a new prompt and persists the registry. Name collisions are
/// rejected before any state changes.
pub fn cmd_add(args: AddArgs) -> Result<()> {
    let ctx = DataContext::resolve();
    let mut registry = store::load_registry(&ctx)?;

    let id = registry.add(&args.name, &args.content)?;
    store::save_registry(&ctx, &registry)?;

    if let Some(prompt) = registry.find_by_id(id) {
        let kind = if prompt.is_workflow() {
            "workflow"
        } else {
            "prompt"
        };
        println!("Added {} '{}' (id {})", kind, prompt.name, prompt.id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptFlowError;
    use crate::test_support::DataDirGuard;
    use serial_test::serial;

    #[test]
    #[serial]
    fn add_persists_prompt() {
        let guard = DataDirGuard::new();

        cmd_add(AddArgs {
            name: "greet".to_string(),
            content: "Hello {{name}}!".to_string(),
        })
        .unwrap();

        let registry = store::load_registry(&guard.ctx()).unwrap();
        let prompt = registry.find_by_name("greet").unwrap();
        assert_eq!(prompt.content, "Hello {{name}}!");
    }

    #[test]
    #[serial]
    fn duplicate_name_is_rejected() {
        let guard = DataDirGuard::new();

        cmd_add(AddArgs {
            name: "x".to_string(),
            content: "first".to_string(),
        })
        .unwrap();

        let err = cmd_add(AddArgs {
            name: "x".to_string(),
            content: "second".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, PromptFlowError::NameCollision(_)));

        let registry = store::load_registry(&guard.ctx()).unwrap();
        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.find_by_name("x").unwrap().content, "first");
    }
}
