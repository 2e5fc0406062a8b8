//! Assistant definition.
//!
//! An [`Assistant`] is a name plus the instruction string handed to the
//! downstream model when a session starts. The instruction text is carried
//! by reference into the session spec and never interpreted locally.

use crate::instructions::INSTRUCTIONS;

/// A conversational assistant: an identity and its behavioral contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assistant {
    name: String,
    instructions: String,
}

impl Assistant {
    /// Create an assistant with explicit instructions.
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self { name: name.into(), instructions: instructions.into() }
    }

    /// The payment-aggregator support-desk assistant.
    pub fn support_desk() -> Self {
        Self::new("support-assistant", INSTRUCTIONS)
    }

    /// Get the assistant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the instruction string.
    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::support_desk()
    }
}
