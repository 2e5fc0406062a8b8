//! Error types for the agent worker.

use thiserror::Error;

/// Result type for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors that can occur while bootstrapping or running the agent.
#[derive(Error, Debug)]
pub enum AgentError {
    /// One or more required environment variables are unset or empty.
    ///
    /// The message names exactly the missing subset, in the order of
    /// [`crate::settings::REQUIRED_ENV`].
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnv(Vec<String>),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Room connection error.
    #[error("Room connection error: {0}")]
    Room(String),

    /// Session error.
    #[error("Session error: {0}")]
    Session(String),
}

impl AgentError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new room error.
    pub fn room<S: Into<String>>(msg: S) -> Self {
        Self::Room(msg.into())
    }

    /// Create a new session error.
    pub fn session<S: Into<String>>(msg: S) -> Self {
        Self::Session(msg.into())
    }
}
