//! Command implementations for promptflow.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler resolves the data context, loads the state
//! it needs, performs its operation, and saves/prints the result.

mod add;
mod edit;
mod history;
mod list;
mod plan;
mod remove;
mod run;
mod scan;
mod show;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Add(args) => add::cmd_add(args),
        Command::Edit(args) => edit::cmd_edit(args),
        Command::Remove(args) => remove::cmd_remove(args),
        Command::List(args) => list::cmd_list(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Scan(args) => scan::cmd_scan(args),
        Command::Plan(args) => plan::cmd_plan(args),
        Command::Run(args) => run::cmd_run(args),
        Command::History(args) => history::cmd_history(args),
    }
}
