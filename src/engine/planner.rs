//! Step planning for promptflow executions.
//!
//! The planner walks a text and, recursively, the bodies of any prompts it
//! calls, producing one [`ExecutionStep`] per variable occurrence that needs
//! a user-supplied value. Steps come out in pre-order, depth-first,
//! left-to-right traversal order of the call/variable tree, numbered by a
//! single counter shared across the whole walk.
//!
//! Each step carries a human-readable context trail (which chain of prompt
//! calls the variable is nested under) and a scoped key of the form
//! `step-<stepId>-<variableName>`. The scoped key is what keeps same-named
//! variables in different call sites from colliding when values are
//! collected.

use crate::engine::registry::PromptRegistry;
use crate::engine::scanner::{self, TokenKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Context label for variables referenced directly in the input text,
/// outside any prompt call.
pub const MAIN_INPUT_CONTEXT: &str = "Main Input";

/// Separator between segments of a context trail.
const TRAIL_SEPARATOR: &str = " → ";

/// One unit of required user input discovered during planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// Sequential id, 0-based, in discovery order.
    pub step_id: usize,

    /// The variable name(s) belonging to this step. The planner emits
    /// exactly one variable per step, one step per occurrence.
    pub variables: Vec<String>,

    /// Human-readable trail of prompt-call names leading to this variable,
    /// or `"Main Input"` for a direct reference.
    pub context: String,

    /// Bare variable name -> globally unique scoped key
    /// (`step-<stepId>-<name>`).
    pub scoped_var_names: HashMap<String, String>,

    /// Scoped key -> user-supplied value; empty until the step is submitted.
    #[serde(default)]
    pub filled_values: HashMap<String, String>,
}

impl ExecutionStep {
    /// True once every variable in this step has a submitted value.
    pub fn is_filled(&self) -> bool {
        self.scoped_var_names
            .values()
            .all(|key| self.filled_values.contains_key(key))
    }
}

/// Build the scoped value key for one variable occurrence.
pub fn scoped_key(step_id: usize, variable: &str) -> String {
    format!("step-{}-{}", step_id, variable)
}

/// Plan the ordered step list for a text against a registry.
///
/// Variables in prompts called (directly or transitively) by `text`
/// contribute steps; calls to unknown prompts contribute nothing and are
/// not recursed into. A prompt already on the current expansion path is not
/// re-entered, so self- and mutually-referential prompts terminate.
pub fn plan(text: &str, registry: &PromptRegistry) -> Vec<ExecutionStep> {
    let mut steps = Vec::new();
    let mut counter = 0usize;
    let mut path = Vec::new();
    walk(text, registry, "", &mut counter, &mut path, &mut steps);
    steps
}

/// Recursive planning walk over one token list.
///
/// `trail` is the parent context ("" at top level), `counter` the shared
/// step counter, `path` the prompt ids currently being expanded (cycle
/// guard).
fn walk(
    text: &str,
    registry: &PromptRegistry,
    trail: &str,
    counter: &mut usize,
    path: &mut Vec<u64>,
    steps: &mut Vec<ExecutionStep>,
) {
    let tokens = scanner::scan(text);

    // Total same-named call count at this level decides whether occurrences
    // get a " (call N)" suffix.
    let mut call_totals: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        if token.kind == TokenKind::PromptCall {
            *call_totals.entry(token.name.as_str()).or_insert(0) += 1;
        }
    }

    let mut call_ordinals: HashMap<&str, usize> = HashMap::new();

    for token in &tokens {
        match token.kind {
            TokenKind::PromptCall => {
                let ordinal = call_ordinals.entry(token.name.as_str()).or_insert(0);
                *ordinal += 1;

                // Unknown prompt: no step, no recursion.
                let Some(prompt) = registry.find_by_name(&token.name) else {
                    continue;
                };

                let label = if call_totals[token.name.as_str()] > 1 {
                    format!("{} (call {})", token.name, *ordinal)
                } else {
                    token.name.clone()
                };
                let child_trail = if trail.is_empty() {
                    label
                } else {
                    format!("{}{}{}", trail, TRAIL_SEPARATOR, label)
                };

                // Cyclic call: counted toward numbering above, but the cycle
                // contributes no further steps.
                if path.contains(&prompt.id) {
                    continue;
                }

                path.push(prompt.id);
                walk(&prompt.content, registry, &child_trail, counter, path, steps);
                path.pop();
            }
            TokenKind::Variable => {
                let step_id = *counter;
                *counter += 1;

                let context = if trail.is_empty() {
                    MAIN_INPUT_CONTEXT.to_string()
                } else {
                    trail.to_string()
                };

                let mut scoped_var_names = HashMap::new();
                scoped_var_names.insert(token.name.clone(), scoped_key(step_id, &token.name));

                steps.push(ExecutionStep {
                    step_id,
                    variables: vec![token.name.clone()],
                    context,
                    scoped_var_names,
                    filled_values: HashMap::new(),
                });
            }
        }
    }
}
