//! Implementation of the `promptflow run` command.
//!
//! Plans the input text, collects a value for every step (from --var flags
//! first, stdin prompts for the rest), resolves the final text, prints it,
//! and appends an execution record to history.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::context::DataContext;
use crate::engine::{ExecutionSession, ExecutionStep};
use crate::error::{PromptFlowError, Result};
use crate::store;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

/// Execute the `promptflow run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let ctx = DataContext::resolve();
    let config = Config::load(&ctx)?;
    let registry = store::load_registry(&ctx)?;

    let provided = parse_var_flags(&args.vars)?;
    let mut session = ExecutionSession::new(&args.text, &registry);

    for index in 0..session.steps().len() {
        let step = session.steps()[index].clone();
        let mut values = provided_values_for(&step, &provided);

        let missing: Vec<String> = step
            .variables
            .iter()
            .filter(|name| !values.contains_key(name.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            prompt_for_values(&step, &missing, &mut values)?;
        }

        session.submit_step(index, &values)?;
    }

    let output = session.resolve()?;
    println!("{}", output);

    let mut history = store::load_history(&ctx)?;
    let name = args.name.as_deref().unwrap_or(&args.text);
    history.append(name, session.input(), &output, config.history_limit);
    store::save_history(&ctx, &history)?;

    Ok(())
}

/// Parse repeated `--var key=value` flags into a scoped-value map.
fn parse_var_flags(flags: &[String]) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();
    for flag in flags {
        let (key, value) = flag.split_once('=').ok_or_else(|| {
            PromptFlowError::UserError(format!(
                "invalid --var '{}': expected <scoped-key>=<value>",
                flag
            ))
        })?;
        values.insert(key.to_string(), value.to_string());
    }
    Ok(values)
}

/// Pick the pre-supplied values relevant to one step, keyed back to bare
/// variable names for submission.
fn provided_values_for(
    step: &ExecutionStep,
    provided: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for (name, key) in &step.scoped_var_names {
        if let Some(value) = provided.get(key) {
            values.insert(name.clone(), value.clone());
        }
    }
    values
}

/// Prompt on stderr and read one line per missing variable from stdin.
///
/// Prompts go to stderr so stdout carries only the resolved text.
fn prompt_for_values(
    step: &ExecutionStep,
    missing: &[String],
    values: &mut HashMap<String, String>,
) -> Result<()> {
    let stdin = io::stdin();
    for name in missing {
        eprint!("[{}] {}: ", step.context, name);
        io::stderr()
            .flush()
            .map_err(|e| PromptFlowError::UserError(format!("failed to flush prompt: {}", e)))?;

        let mut line = String::new();
        stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| PromptFlowError::UserError(format!("failed to read value: {}", e)))?;
        values.insert(
            name.clone(),
            line.trim_end_matches(['\r', '\n']).to_string(),
        );
    }
    Ok(())
}
