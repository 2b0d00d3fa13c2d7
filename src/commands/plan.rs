//! Implementation of the `promptflow plan` command.

use crate::cli::PlanArgs;
use crate::context::DataContext;
use crate::engine::planner;
use crate::error::{PromptFlowError, Result};
use crate::store;

/// Execute the `promptflow plan` command.
///
/// Plans the text against the stored registry and prints the ordered step
/// list, one line per step (or the full structure as JSON with --json).
pub fn cmd_plan(args: PlanArgs) -> Result<()> {
    let ctx = DataContext::resolve();
    let registry = store::load_registry(&ctx)?;

    let steps = planner::plan(&args.text, &registry);

    if args.json {
        let json = serde_json::to_string_pretty(&steps)
            .map_err(|e| PromptFlowError::UserError(format!("failed to encode steps: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    if steps.is_empty() {
        println!("No steps: nothing to fill in.");
        return Ok(());
    }

    for step in &steps {
        for variable in &step.variables {
            println!(
                "step {:<3} [{}] {} -> {}",
                step.step_id, step.context, variable, step.scoped_var_names[variable]
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AddArgs;
    use crate::commands::add::cmd_add;
    use crate::test_support::DataDirGuard;
    use serial_test::serial;

    #[test]
    #[serial]
    fn plan_command_runs_with_and_without_json() {
        let _guard = DataDirGuard::new();
        cmd_add(AddArgs {
            name: "greet".to_string(),
            content: "Hello {{name}}!".to_string(),
        })
        .unwrap();

        cmd_plan(PlanArgs {
            text: "greet() {{extra}}".to_string(),
            json: false,
        })
        .unwrap();
        cmd_plan(PlanArgs {
            text: "greet()".to_string(),
            json: true,
        })
        .unwrap();
        cmd_plan(PlanArgs {
            text: "plain".to_string(),
            json: false,
        })
        .unwrap();
    }
}
