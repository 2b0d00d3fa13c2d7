//! Template scanner for promptflow.
//!
//! Finds every prompt-call and variable token in a text, in left-to-right
//! order, with its name and exact character span. Two token shapes exist:
//!
//! - `name()`: a prompt call, one or more word characters immediately
//!   followed by an empty parenthesis pair.
//! - `{{name}}`: a variable placeholder.
//!
//! The two patterns are disjoint by construction, so spans never overlap.
//! Ordering by ascending start offset is load-bearing: it defines both the
//! user-facing step numbering during planning and the substitution order
//! contract during resolution.
//!
//! The scanner does not consult the registry. A call naming a prompt that
//! does not exist is still emitted as a token; whether it resolves to
//! anything is the planner's and resolver's concern.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for prompt-call tokens, e.g. `deploy()`.
static PROMPT_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\(\)").expect("Invalid prompt call regex"));

/// Regex for variable placeholder tokens, e.g. `{{name}}`.
static VARIABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("Invalid variable regex"));

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A `name()` prompt call.
    PromptCall,
    /// A `{{name}}` variable placeholder.
    Variable,
}

/// One token found in a template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The extracted name (without call parens or braces).
    pub name: String,
    /// Byte offset of the first character of the token in the source text.
    pub start: usize,
    /// Byte offset one past the last character of the token.
    pub end: usize,
}

impl Token {
    /// The exact source text this token covers.
    pub fn span<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Scan a text for prompt-call and variable tokens.
///
/// Returns all tokens ordered strictly by ascending start offset.
pub fn scan(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for caps in PROMPT_CALL_REGEX.captures_iter(text) {
        let whole = caps.get(0).expect("capture group 0 always exists");
        let name = caps.get(1).expect("call regex has one capture group");
        tokens.push(Token {
            kind: TokenKind::PromptCall,
            name: name.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
        });
    }

    for caps in VARIABLE_REGEX.captures_iter(text) {
        let whole = caps.get(0).expect("capture group 0 always exists");
        let name = caps.get(1).expect("variable regex has one capture group");
        tokens.push(Token {
            kind: TokenKind::Variable,
            name: name.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
        });
    }

    // The two patterns cannot overlap, so sorting by start offset alone
    // yields a total order.
    tokens.sort_by_key(|t| t.start);
    tokens
}
