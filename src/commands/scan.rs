//! Implementation of the `promptflow scan` command.

use crate::cli::ScanArgs;
use crate::engine::{scan, TokenKind};
use crate::error::Result;

/// Execute the `promptflow scan` command.
///
/// Prints one line per token, in source order: span, kind, and name.
pub fn cmd_scan(args: ScanArgs) -> Result<()> {
    let tokens = scan(&args.text);

    if tokens.is_empty() {
        println!("No tokens.");
        return Ok(());
    }

    for token in tokens {
        let kind = match token.kind {
            TokenKind::PromptCall => "call",
            TokenKind::Variable => "variable",
        };
        println!(
            "{:>4}..{:<4} {:<8} {}",
            token.start, token.end, kind, token.name
        );
    }
    Ok(())
}
