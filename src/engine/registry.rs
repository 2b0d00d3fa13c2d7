//! Prompt model and registry for promptflow.
//!
//! A [`Prompt`] is a named, reusable template whose body may contain prompt
//! calls (`name()`) and variable placeholders (`{{var}}`). The
//! [`PromptRegistry`] owns all prompts, enforces name uniqueness, and is the
//! lookup surface every other engine component goes through.
//!
//! Removal is unconditional: no reference counting, no cascade. A prompt
//! that called a removed prompt will simply fail to resolve that call at
//! execution time, leaving the call text literal in the output.

use crate::engine::scanner::{self, TokenKind};
use crate::error::{PromptFlowError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, reusable template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique identifier, assigned at creation, immutable.
    pub id: u64,

    /// Unique name used in calls (`name()`).
    pub name: String,

    /// The template body text.
    pub content: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last content/name edit timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Prompt {
    /// The set of placeholder names appearing directly in `content`.
    ///
    /// Duplicates are removed; order follows first appearance. Variables
    /// inside called prompts are not included, only direct references.
    pub fn variables(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for token in scanner::scan(&self.content) {
            if token.kind == TokenKind::Variable && !seen.contains(&token.name) {
                seen.push(token.name);
            }
        }
        seen
    }

    /// True iff `content` contains at least one prompt call.
    ///
    /// Workflows are prompts that invoke other prompts; simple prompts
    /// contain only variables or plain text.
    pub fn is_workflow(&self) -> bool {
        scanner::scan(&self.content)
            .iter()
            .any(|t| t.kind == TokenKind::PromptCall)
    }
}

/// Owns all prompt entities and enforces name uniqueness.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PromptRegistry {
    prompts: Vec<Prompt>,
    next_id: u64,
}

impl PromptRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store a new prompt.
    ///
    /// Fails with [`PromptFlowError::NameCollision`] if `name` is already
    /// taken; the registry is left unchanged on failure. Returns the new
    /// prompt's id on success.
    pub fn add(&mut self, name: &str, content: &str) -> Result<u64> {
        if self.find_by_name(name).is_some() {
            return Err(PromptFlowError::NameCollision(name.to_string()));
        }

        let id = self.next_id;
        self.next_id += 1;

        let now = Utc::now();
        self.prompts.push(Prompt {
            id,
            name: name.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    /// Update an existing prompt's name and content.
    ///
    /// Fails with [`PromptFlowError::NameCollision`] if `name` belongs to a
    /// *different* prompt (renaming a prompt to its own name is fine), and
    /// with [`PromptFlowError::PromptNotFound`] if `id` is unknown. Bumps
    /// `updated_at` on success.
    pub fn update(&mut self, id: u64, name: &str, content: &str) -> Result<()> {
        if let Some(other) = self.find_by_name(name)
            && other.id != id
        {
            return Err(PromptFlowError::NameCollision(name.to_string()));
        }

        let prompt = self
            .prompts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PromptFlowError::PromptNotFound(format!("id {}", id)))?;

        prompt.name = name.to_string();
        prompt.content = content.to_string();
        prompt.updated_at = Utc::now();
        Ok(())
    }

    /// Remove a prompt by id. Returns true if a prompt was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != id);
        self.prompts.len() != before
    }

    /// Look up a prompt by name.
    pub fn find_by_name(&self, name: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.name == name)
    }

    /// Look up a prompt by id.
    pub fn find_by_id(&self, id: u64) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Snapshot of all prompts.
    pub fn all(&self) -> &[Prompt] {
        &self.prompts
    }
}
