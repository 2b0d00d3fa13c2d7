//! The PromptFlow execution engine.
//!
//! Resolves a user-authored text block that may reference other named
//! prompts (`name()`) and placeholder variables (`{{var}}`): prompts expand
//! recursively, every variable occurrence is collected as a numbered step
//! with a call-context trail and a unique scoped key, and user-supplied
//! values are substituted back into the fully expanded text.
//!
//! Leaf first: the scanner finds tokens, the registry stores prompt
//! definitions, the planner turns a text into an ordered step list, the
//! resolver produces the final flattened output, and a session ties one run
//! together.

pub mod planner;
pub mod registry;
pub mod resolver;
pub mod scanner;
pub mod session;

pub use planner::{plan, scoped_key, ExecutionStep, MAIN_INPUT_CONTEXT};
pub use registry::{Prompt, PromptRegistry};
pub use resolver::resolve;
pub use scanner::{scan, Token, TokenKind};
pub use session::{ExecutionSession, SubmitOutcome};
