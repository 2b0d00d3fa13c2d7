//! Resolution of planned texts into final output.
//!
//! Given a text, a registry, and a map of scoped-key -> value, the resolver
//! recursively substitutes prompt calls with their expanded bodies and
//! variable placeholders with their assigned values.
//!
//! The central correctness invariant: resolution must assign every variable
//! occurrence the same step id the planner assigned it, so scoped keys line
//! up between planning and resolution. Both walks therefore thread one
//! shared counter through the same pre-order traversal: a variable token
//! consumes one id, a known call consumes however many ids its body emits,
//! an unknown or cyclic call consumes none.
//!
//! Output is assembled as alternating literal slices and substituted values
//! in ascending token order, which leaves earlier offsets untouched by later
//! substitutions (the same guarantee reverse-order in-place splicing gives,
//! without tracking shifted offsets).

use crate::engine::planner::scoped_key;
use crate::engine::registry::PromptRegistry;
use crate::engine::scanner::{self, TokenKind};
use std::collections::HashMap;

/// Resolve a text against a registry and a set of scoped values.
///
/// `base_step_id` is the step id the first planned token of `text` received
/// during planning; pass 0 when resolving the same top-level text that was
/// planned. Variables with no value in `scoped_values` and calls to unknown
/// prompts are left as literal text.
pub fn resolve(
    text: &str,
    scoped_values: &HashMap<String, String>,
    registry: &PromptRegistry,
    base_step_id: usize,
) -> String {
    let mut counter = base_step_id;
    let mut path = Vec::new();
    resolve_walk(text, scoped_values, registry, &mut counter, &mut path)
}

fn resolve_walk(
    text: &str,
    scoped_values: &HashMap<String, String>,
    registry: &PromptRegistry,
    counter: &mut usize,
    path: &mut Vec<u64>,
) -> String {
    let tokens = scanner::scan(text);
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for token in &tokens {
        out.push_str(&text[cursor..token.start]);

        match token.kind {
            TokenKind::PromptCall => match registry.find_by_name(&token.name) {
                Some(prompt) if !path.contains(&prompt.id) => {
                    path.push(prompt.id);
                    let expanded =
                        resolve_walk(&prompt.content, scoped_values, registry, counter, path);
                    path.pop();
                    out.push_str(&expanded);
                }
                // Unknown prompt or a call re-entering the current expansion
                // path: the call syntax stays visible in the output.
                _ => out.push_str(token.span(text)),
            },
            TokenKind::Variable => {
                let key = scoped_key(*counter, &token.name);
                *counter += 1;
                match scoped_values.get(&key) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(token.span(text)),
                }
            }
        }

        cursor = token.end;
    }

    out.push_str(&text[cursor..]);
    out
}
