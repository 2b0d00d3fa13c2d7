//! CLI argument parsing for promptflow.
//!
//! Uses clap derive macros for declarative argument definitions. This module
//! defines the command structure; actual implementations are in the
//! `commands` module.

use clap::{Parser, Subcommand};

/// Promptflow: named-prompt registry with recursive workflow expansion
/// and variable substitution.
///
/// Prompts are reusable text templates. A template may call other prompts
/// by name (`deploy()`) and declare variables (`{{target}}`); running a
/// template expands calls recursively, collects a value for every variable
/// occurrence step by step, and substitutes them into the final text.
#[derive(Parser, Debug)]
#[command(name = "promptflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse CLI arguments from the process environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptflow.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new named prompt.
    ///
    /// Fails if a prompt with the same name already exists.
    Add(AddArgs),

    /// Edit an existing prompt's name or content.
    ///
    /// Renaming fails if the new name belongs to a different prompt.
    Edit(EditArgs),

    /// Remove a prompt by name.
    ///
    /// Removal is unconditional; prompts that call the removed prompt keep
    /// the call as literal text at execution time.
    Remove(RemoveArgs),

    /// List all prompts.
    List(ListArgs),

    /// Show one prompt's metadata and content.
    Show(ShowArgs),

    /// Scan a text and print its prompt-call and variable tokens.
    Scan(ScanArgs),

    /// Plan a text and print the ordered execution steps.
    Plan(PlanArgs),

    /// Execute a text: plan, collect values, resolve, record history.
    ///
    /// Values can be supplied up front with repeated --var flags keyed by
    /// scoped key (e.g. --var step-0-name=Ada); any step left unfilled is
    /// prompted for on stdin.
    Run(RunArgs),

    /// Show recent execution history, newest first.
    History(HistoryArgs),
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name used in calls (`name()`).
    pub name: String,

    /// Template body; may contain calls and `{{variables}}`.
    pub content: String,
}

/// Arguments for the `edit` command.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Name of the prompt to edit.
    pub name: String,

    /// New name for the prompt.
    #[arg(long)]
    pub rename: Option<String>,

    /// New template body.
    #[arg(long)]
    pub content: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Name of the prompt to remove.
    pub name: String,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list workflows (prompts that call other prompts).
    #[arg(long)]
    pub workflows: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Name of the prompt to show.
    pub name: String,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Text to scan.
    pub text: String,
}

/// Arguments for the `plan` command.
#[derive(Parser, Debug)]
pub struct PlanArgs {
    /// Text to plan.
    pub text: String,

    /// Print steps as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Text to execute; may call prompts and declare variables.
    pub text: String,

    /// Pre-supplied values, as `<scoped-key>=<value>` (repeatable).
    #[arg(long = "var", value_name = "SCOPED_KEY=VALUE")]
    pub vars: Vec<String>,

    /// Display name recorded in history (defaults to the input text).
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the `history` command.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Maximum number of records to show.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_with_vars() {
        let cli = Cli::parse_from([
            "promptflow",
            "run",
            "greet()",
            "--var",
            "step-0-name=Ada",
            "--name",
            "morning greeting",
        ]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.text, "greet()");
                assert_eq!(args.vars, ["step-0-name=Ada"]);
                assert_eq!(args.name.as_deref(), Some("morning greeting"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_plan_json_flag() {
        let cli = Cli::parse_from(["promptflow", "plan", "{{x}}", "--json"]);
        match cli.command {
            Command::Plan(args) => assert!(args.json),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
