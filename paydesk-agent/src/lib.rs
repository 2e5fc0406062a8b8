//! # paydesk-agent
//!
//! Voice and chat support agent worker for a payment aggregator desk.
//!
//! The worker loads credentials from a layered dotenv source, validates a
//! fixed required list, and then registers a per-job entrypoint that wires a
//! speech-to-text / language-model / text-to-speech / VAD pipeline to a
//! real-time room and greets the caller. Conversational behavior lives
//! entirely in the instruction string handed to the downstream model; the
//! media loop lives entirely in the transport behind [`SessionDriver`].
//!
//! ```text
//!   .env.local / .env ──▶ Settings ──▶ Worker ──▶ entrypoint (per job)
//!                                                     │
//!                                       PipelineConfig (stt/llm/tts/vad)
//!                                                     │
//!                                  AgentSession ──▶ SessionDriver ──▶ room
//! ```
//!
//! ## Transport feature
//!
//! The LiveKit binding is gated behind the `livekit` feature:
//!
//! ```toml
//! [dependencies]
//! paydesk-agent = { version = "0.1", features = ["livekit"] }
//! ```
//!
//! The library and its tests build without it; the worker binary requires
//! it.

pub mod agent;
pub mod error;
pub mod instructions;
pub mod pipeline;
pub mod session;
pub mod settings;
pub mod worker;

// Transport implementations
#[cfg(feature = "livekit")]
pub mod livekit;

// Re-exports
pub use agent::Assistant;
pub use error::{AgentError, Result};
pub use pipeline::{
    NoiseCancellation, PipelineConfig, PipelineConfigBuilder, RoomInputOptions, VadConfig, VadMode,
};
pub use session::{
    ActiveSession, AgentSession, BoxedActiveSession, BoxedDriver, RoomHandle, SessionDriver,
    SessionSpec,
};
pub use settings::Settings;
pub use worker::{EntrypointFn, JobContext, Worker, WorkerOptions, entrypoint};
