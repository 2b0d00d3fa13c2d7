//! Error types for the promptflow CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptflow operations.
///
/// Each variant maps to a specific exit code. All failures are recoverable
/// by the caller: re-prompt the user, pick a different name, fix the input.
#[derive(Error, Debug)]
pub enum PromptFlowError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A prompt name is already taken by a different prompt.
    #[error("a prompt named '{0}' already exists")]
    NameCollision(String),

    /// No prompt with the given name or id exists.
    #[error("no prompt found for '{0}'")]
    PromptNotFound(String),

    /// A step was submitted with blank or absent variable values.
    #[error("step {step} is missing values for: {}", .missing.join(", "))]
    MissingValue {
        /// The 0-based id of the step that failed validation.
        step: usize,
        /// Variable names with no non-blank value supplied.
        missing: Vec<String>,
    },
}

impl PromptFlowError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptFlowError::UserError(_) => exit_codes::USER_ERROR,
            PromptFlowError::NameCollision(_) => exit_codes::USER_ERROR,
            PromptFlowError::PromptNotFound(_) => exit_codes::USER_ERROR,
            PromptFlowError::MissingValue { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for promptflow operations.
pub type Result<T> = std::result::Result<T, PromptFlowError>;
