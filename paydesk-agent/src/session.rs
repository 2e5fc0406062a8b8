//! Session layer: the seam between this worker and the room transport.
//!
//! The transport (room connection, audio plumbing, turn-taking) lives behind
//! [`SessionDriver`]. The worker only ever asks it to start one configured
//! pipeline per job and to produce replies; everything that happens between
//! turns is the transport's business. Substituting a recording driver makes
//! the whole entrypoint testable without a network.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::agent::Assistant;
use crate::error::{AgentError, Result};
use crate::pipeline::{PipelineConfig, RoomInputOptions};

/// Identifies the communication room a job is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomHandle {
    name: String,
}

impl RoomHandle {
    /// Create a handle for the named room.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the room name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Everything the transport needs to bring one session up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSpec {
    /// Room the session binds to.
    pub room: RoomHandle,
    /// Assistant identity, used as the participant name.
    pub agent_name: String,
    /// Instruction string for the downstream model.
    pub instructions: String,
    /// Provider endpoints for the media pipeline.
    pub pipeline: PipelineConfig,
    /// Room input options.
    pub input_options: RoomInputOptions,
}

/// A factory for live sessions, implemented per transport.
#[async_trait]
pub trait SessionDriver: Send + Sync {
    /// Get the transport name (e.g., "livekit").
    fn transport(&self) -> &str;

    /// Bind the configured pipeline to the room and begin the media loop.
    async fn start(&self, spec: SessionSpec) -> Result<BoxedActiveSession>;
}

/// A running session as seen by the worker.
#[async_trait]
pub trait ActiveSession: Send + Sync {
    /// Get the session ID.
    fn session_id(&self) -> &str;

    /// Ask the assistant to produce one reply following `instructions`.
    async fn generate_reply(&self, instructions: &str) -> Result<()>;

    /// Close the session gracefully.
    async fn close(&self) -> Result<()>;
}

/// A shared driver type for thread-safe access.
pub type BoxedDriver = Arc<dyn SessionDriver>;

/// A boxed live session for dynamic dispatch.
pub type BoxedActiveSession = Box<dyn ActiveSession>;

/// One assistant session over one pipeline.
///
/// Mirrors the lifecycle the worker entrypoint drives: construct with a
/// pipeline, start against a room exactly once, then request replies.
pub struct AgentSession {
    driver: BoxedDriver,
    pipeline: PipelineConfig,
    active: RwLock<Option<BoxedActiveSession>>,
}

impl AgentSession {
    /// Create a session over the given transport and pipeline.
    pub fn new(driver: BoxedDriver, pipeline: PipelineConfig) -> Self {
        Self { driver, pipeline, active: RwLock::new(None) }
    }

    /// Get the pipeline configuration.
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Start the session in `room` with the given assistant.
    ///
    /// Starting twice is an error; one `AgentSession` maps to one
    /// conversation.
    pub async fn start(
        &self,
        room: &RoomHandle,
        agent: &Assistant,
        input_options: RoomInputOptions,
    ) -> Result<()> {
        let mut guard = self.active.write().await;
        if guard.is_some() {
            return Err(AgentError::session("session already started"));
        }

        let spec = SessionSpec {
            room: room.clone(),
            agent_name: agent.name().to_string(),
            instructions: agent.instructions().to_string(),
            pipeline: self.pipeline.clone(),
            input_options,
        };
        let session = self.driver.start(spec).await?;
        tracing::info!(
            session_id = %session.session_id(),
            transport = %self.driver.transport(),
            room = %room.name(),
            "session started"
        );
        *guard = Some(session);
        Ok(())
    }

    /// Request one reply from the assistant.
    pub async fn generate_reply(&self, instructions: &str) -> Result<()> {
        let guard = self.active.read().await;
        let session =
            guard.as_ref().ok_or_else(|| AgentError::session("session not started"))?;
        session.generate_reply(instructions).await
    }

    /// Close the session. Closing an unstarted or already-closed session is
    /// a no-op.
    pub async fn close(&self) -> Result<()> {
        let mut guard = self.active.write().await;
        if let Some(session) = guard.take() {
            session.close().await?;
        }
        Ok(())
    }
}
