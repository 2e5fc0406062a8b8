//! Per-job entrypoint and the worker loop that dispatches to it.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::mpsc;

use crate::agent::Assistant;
use crate::error::Result;
use crate::instructions::GREETING;
use crate::pipeline::{PipelineConfig, RoomInputOptions, VadConfig};
use crate::session::{AgentSession, BoxedDriver, RoomHandle};

const STT_MODEL: &str = "deepgram/nova-2-general:en";
const LLM_MODEL: &str = "openai/gpt-4.1-mini";
const TTS_VOICE: &str = "cartesia/sonic-3:9626c31c-bec5-4cca-baa8-f8ba9e84c8bc";

/// Context handed to the entrypoint for one job.
#[derive(Clone)]
pub struct JobContext {
    room: RoomHandle,
    driver: BoxedDriver,
}

impl JobContext {
    /// Create a context for a job in `room`.
    pub fn new(room: RoomHandle, driver: BoxedDriver) -> Self {
        Self { room, driver }
    }

    /// Get the room this job is bound to.
    pub fn room(&self) -> &RoomHandle {
        &self.room
    }

    /// Get the session transport.
    pub fn driver(&self) -> BoxedDriver {
        self.driver.clone()
    }
}

/// Session entrypoint, invoked once per job.
///
/// Wires the support pipeline, starts the session against the job's room,
/// and sends the initial greeting. The transport owns the conversation from
/// there on.
pub async fn entrypoint(ctx: JobContext) -> Result<()> {
    let pipeline = PipelineConfig::builder()
        .stt(STT_MODEL)
        .llm(LLM_MODEL)
        .tts(TTS_VOICE)
        .vad(VadConfig::server_vad())
        .build()?;

    let session = AgentSession::new(ctx.driver(), pipeline);
    // Switch to bvc_telephony for phone channels.
    session
        .start(ctx.room(), &Assistant::support_desk(), RoomInputOptions::bvc())
        .await?;

    session.generate_reply(GREETING).await?;
    Ok(())
}

/// Boxed per-job callback.
pub type EntrypointFn = Arc<dyn Fn(JobContext) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Worker configuration: the per-job callback to run.
#[derive(Clone)]
pub struct WorkerOptions {
    /// Callback invoked for each job.
    pub entrypoint: EntrypointFn,
}

impl WorkerOptions {
    /// Register an async function as the per-job entrypoint.
    pub fn new<F, Fut>(entrypoint: F) -> Self
    where
        F: Fn(JobContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        Self { entrypoint: Arc::new(move |ctx| Box::pin(entrypoint(ctx))) }
    }
}

/// Dispatches jobs to the registered entrypoint.
///
/// Every job gets a fresh [`JobContext`] and, through the entrypoint, a
/// fresh pipeline; nothing is shared between concurrent sessions beyond the
/// transport handle itself.
pub struct Worker {
    options: WorkerOptions,
    driver: BoxedDriver,
}

impl Worker {
    /// Create a worker over the given transport.
    pub fn new(options: WorkerOptions, driver: BoxedDriver) -> Self {
        Self { options, driver }
    }

    /// Run one job for `room`.
    pub async fn dispatch(&self, room: RoomHandle) -> Result<()> {
        let ctx = JobContext::new(room, self.driver.clone());
        (self.options.entrypoint)(ctx).await
    }

    /// Accept job assignments until the queue closes.
    ///
    /// A failing job is logged and does not stop the worker.
    pub async fn run(&self, mut jobs: mpsc::Receiver<RoomHandle>) {
        while let Some(room) = jobs.recv().await {
            let room_name = room.name().to_string();
            tracing::info!(room = %room_name, "job received");
            if let Err(error) = self.dispatch(room).await {
                tracing::error!(room = %room_name, %error, "job failed");
            }
        }
    }
}
