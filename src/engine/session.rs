//! Per-run execution sessions.
//!
//! A session is constructed for one user-initiated run: it snapshots the
//! registry, plans the step list once, collects values step by step, and
//! resolves the final text after the last step is filled. The caller owns
//! the session's lifecycle and threads it through explicitly; there is no
//! shared manager or notification mechanism, every operation returns the
//! updated state.
//!
//! Abandoning a session before the final step simply drops it; partially
//! filled values have no side effects on the registry or history.

use crate::engine::planner::{self, ExecutionStep};
use crate::engine::registry::PromptRegistry;
use crate::engine::resolver;
use crate::error::{PromptFlowError, Result};
use std::collections::HashMap;

/// Result of submitting values for one step.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// The full step list with the submitted step's values recorded.
    pub steps: Vec<ExecutionStep>,
    /// True once every step has values and the session is ready to resolve.
    pub is_complete: bool,
}

/// One in-progress execution of a text against a registry snapshot.
///
/// The session clones the registry at construction, so registry edits made
/// while a run is in flight do not shift step numbering under it.
#[derive(Debug, Clone)]
pub struct ExecutionSession {
    registry: PromptRegistry,
    input: String,
    steps: Vec<ExecutionStep>,
}

impl ExecutionSession {
    /// Plan a new session for `text`.
    pub fn new(text: &str, registry: &PromptRegistry) -> Self {
        let registry = registry.clone();
        let steps = planner::plan(text, &registry);
        Self {
            registry,
            input: text.to_string(),
            steps,
        }
    }

    /// The text this session was planned from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The ordered step list, including any values submitted so far.
    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    /// True once every step has a value for every variable.
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(ExecutionStep::is_filled)
    }

    /// Submit values for the step at `index`, keyed by bare variable name.
    ///
    /// Validation fails with [`PromptFlowError::MissingValue`] when any
    /// variable in the step has no non-blank value; the step is left
    /// untouched so it can be re-presented. On success the values are
    /// recorded under their scoped keys and the updated step list is
    /// returned together with a completion flag.
    pub fn submit_step(
        &mut self,
        index: usize,
        values: &HashMap<String, String>,
    ) -> Result<SubmitOutcome> {
        let step = self.steps.get(index).ok_or_else(|| {
            PromptFlowError::UserError(format!(
                "step index {} out of range ({} steps planned)",
                index,
                self.steps.len()
            ))
        })?;

        let missing: Vec<String> = step
            .variables
            .iter()
            .filter(|name| {
                values
                    .get(name.as_str())
                    .map(|v| v.trim().is_empty())
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(PromptFlowError::MissingValue {
                step: step.step_id,
                missing,
            });
        }

        let step = &mut self.steps[index];
        for name in &step.variables {
            let key = step.scoped_var_names[name].clone();
            step.filled_values.insert(key, values[name].clone());
        }

        Ok(SubmitOutcome {
            steps: self.steps.clone(),
            is_complete: self.is_complete(),
        })
    }

    /// All submitted values merged into one scoped-key -> value map.
    pub fn collected_values(&self) -> HashMap<String, String> {
        let mut merged = HashMap::new();
        for step in &self.steps {
            for (key, value) in &step.filled_values {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    /// Resolve the session's input with the collected values.
    ///
    /// Fails with [`PromptFlowError::MissingValue`] naming the first
    /// unfilled step if the session is not complete.
    pub fn resolve(&self) -> Result<String> {
        if let Some(step) = self.steps.iter().find(|s| !s.is_filled()) {
            return Err(PromptFlowError::MissingValue {
                step: step.step_id,
                missing: step.variables.clone(),
            });
        }

        Ok(resolver::resolve(
            &self.input,
            &self.collected_values(),
            &self.registry,
            0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(entries: &[(&str, &str)]) -> PromptRegistry {
        let mut registry = PromptRegistry::new();
        for (name, content) in entries {
            registry.add(name, content).unwrap();
        }
        registry
    }

    fn vals(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn tokenless_session_is_immediately_complete() {
        let registry = PromptRegistry::new();
        let session = ExecutionSession::new("plain text", &registry);
        assert!(session.steps().is_empty());
        assert!(session.is_complete());
        assert_eq!(session.resolve().unwrap(), "plain text");
    }

    #[test]
    fn step_by_step_fill_and_resolve() {
        let registry = registry_with(&[("greet", "Hello {{name}}!")]);
        let mut session = ExecutionSession::new("greet()", &registry);
        assert_eq!(session.steps().len(), 1);
        assert!(!session.is_complete());

        let outcome = session.submit_step(0, &vals(&[("name", "Ada")])).unwrap();
        assert!(outcome.is_complete);
        assert_eq!(outcome.steps[0].filled_values["step-0-name"], "Ada");

        assert_eq!(session.resolve().unwrap(), "Hello Ada!");
    }

    #[test]
    fn blank_value_is_rejected_and_step_left_untouched() {
        let registry = PromptRegistry::new();
        let mut session = ExecutionSession::new("{{name}}", &registry);

        let err = session.submit_step(0, &vals(&[("name", "   ")])).unwrap_err();
        assert!(matches!(err, PromptFlowError::MissingValue { step: 0, .. }));
        assert!(session.steps()[0].filled_values.is_empty());

        let err = session.submit_step(0, &HashMap::new()).unwrap_err();
        assert!(matches!(err, PromptFlowError::MissingValue { .. }));
    }

    #[test]
    fn out_of_range_index_is_a_user_error() {
        let registry = PromptRegistry::new();
        let mut session = ExecutionSession::new("{{x}}", &registry);
        let err = session.submit_step(5, &vals(&[("x", "v")])).unwrap_err();
        assert!(matches!(err, PromptFlowError::UserError(_)));
    }

    #[test]
    fn resolve_before_completion_fails() {
        let registry = PromptRegistry::new();
        let session = ExecutionSession::new("{{a}} {{b}}", &registry);
        let err = session.resolve().unwrap_err();
        assert!(matches!(err, PromptFlowError::MissingValue { step: 0, .. }));
    }

    #[test]
    fn registry_edits_do_not_affect_in_flight_session() {
        let mut registry = registry_with(&[("greet", "Hello {{name}}!")]);
        let mut session = ExecutionSession::new("greet()", &registry);

        // Mutate the live registry mid-session.
        let id = registry.find_by_name("greet").unwrap().id;
        registry.update(id, "greet", "changed {{other}}").unwrap();

        session.submit_step(0, &vals(&[("name", "Ada")])).unwrap();
        assert_eq!(session.resolve().unwrap(), "Hello Ada!");
    }

    #[test]
    fn same_variable_in_two_steps_tracked_independently() {
        let registry = PromptRegistry::new();
        let mut session = ExecutionSession::new("{{x}} vs {{x}}", &registry);

        session.submit_step(0, &vals(&[("x", "left")])).unwrap();
        let outcome = session.submit_step(1, &vals(&[("x", "right")])).unwrap();
        assert!(outcome.is_complete);
        assert_eq!(session.resolve().unwrap(), "left vs right");
    }
}
