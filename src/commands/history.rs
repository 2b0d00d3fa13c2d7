//! Implementation of the `promptflow history` command.

use crate::cli::HistoryArgs;
use crate::context::DataContext;
use crate::error::Result;
use crate::store;

/// Execute the `promptflow history` command.
///
/// Prints the most recent execution records, newest first.
pub fn cmd_history(args: HistoryArgs) -> Result<()> {
    let ctx = DataContext::resolve();
    let history = store::load_history(&ctx)?;

    let recent = history.recent(args.limit);
    if recent.is_empty() {
        println!("No executions recorded.");
        return Ok(());
    }

    for record in recent {
        println!(
            "{}  #{}  {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.id,
            record.name
        );
        println!("  in:  {}", record.input);
        println!("  out: {}", record.output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ExecutionHistory;
    use crate::test_support::DataDirGuard;
    use serial_test::serial;

    #[test]
    #[serial]
    fn history_command_runs_empty_and_populated() {
        let guard = DataDirGuard::new();
        cmd_history(HistoryArgs { limit: 10 }).unwrap();

        let mut history = ExecutionHistory::new();
        history.append("run", "greet()", "Hello!", 50);
        store::save_history(&guard.ctx(), &history).unwrap();

        cmd_history(HistoryArgs { limit: 10 }).unwrap();
    }
}
