//! Entrypoint and worker behavior against a recording transport.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use paydesk_agent::agent::Assistant;
use paydesk_agent::error::{AgentError, Result};
use paydesk_agent::instructions::GREETING;
use paydesk_agent::pipeline::{NoiseCancellation, PipelineConfig, VadMode};
use paydesk_agent::session::{
    ActiveSession, AgentSession, BoxedActiveSession, RoomHandle, SessionDriver, SessionSpec,
};
use paydesk_agent::worker::{JobContext, Worker, WorkerOptions, entrypoint};

#[derive(Default)]
struct Recorder {
    starts: Mutex<Vec<SessionSpec>>,
    replies: Mutex<Vec<String>>,
    order: Mutex<Vec<&'static str>>,
}

struct FakeDriver {
    rec: Arc<Recorder>,
    fail_start: bool,
}

impl FakeDriver {
    fn ok(rec: Arc<Recorder>) -> Self {
        Self { rec, fail_start: false }
    }

    fn failing(rec: Arc<Recorder>) -> Self {
        Self { rec, fail_start: true }
    }
}

#[async_trait]
impl SessionDriver for FakeDriver {
    fn transport(&self) -> &str {
        "fake"
    }

    async fn start(&self, spec: SessionSpec) -> Result<BoxedActiveSession> {
        if self.fail_start {
            return Err(AgentError::room("connection refused"));
        }
        self.rec.order.lock().unwrap().push("start");
        self.rec.starts.lock().unwrap().push(spec);
        Ok(Box::new(FakeSession { rec: self.rec.clone() }))
    }
}

struct FakeSession {
    rec: Arc<Recorder>,
}

#[async_trait]
impl ActiveSession for FakeSession {
    fn session_id(&self) -> &str {
        "fake-session"
    }

    async fn generate_reply(&self, instructions: &str) -> Result<()> {
        self.rec.order.lock().unwrap().push("reply");
        self.rec.replies.lock().unwrap().push(instructions.to_string());
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.rec.order.lock().unwrap().push("close");
        Ok(())
    }
}

fn support_pipeline() -> PipelineConfig {
    PipelineConfig::builder().stt("stt").llm("llm").tts("tts").build().unwrap()
}

#[tokio::test]
async fn test_entrypoint_wires_one_pipeline_then_greets() {
    let rec = Arc::new(Recorder::default());
    let driver = Arc::new(FakeDriver::ok(rec.clone()));
    let ctx = JobContext::new(RoomHandle::new("merchant-123"), driver);

    entrypoint(ctx).await.unwrap();

    let starts = rec.starts.lock().unwrap();
    assert_eq!(starts.len(), 1);
    let spec = &starts[0];
    assert_eq!(spec.room.name(), "merchant-123");
    assert_eq!(spec.pipeline.stt, "deepgram/nova-2-general:en");
    assert_eq!(spec.pipeline.llm, "openai/gpt-4.1-mini");
    assert_eq!(spec.pipeline.tts, "cartesia/sonic-3:9626c31c-bec5-4cca-baa8-f8ba9e84c8bc");
    assert_eq!(spec.pipeline.vad.mode, VadMode::ServerVad);
    assert_eq!(spec.input_options.noise_cancellation, NoiseCancellation::Bvc);

    let support = Assistant::support_desk();
    assert_eq!(spec.agent_name, support.name());
    assert_eq!(spec.instructions, support.instructions());

    let replies = rec.replies.lock().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0], GREETING);

    let order = rec.order.lock().unwrap();
    assert_eq!(order.as_slice(), ["start", "reply"]);
}

#[tokio::test]
async fn test_entrypoint_propagates_start_failure_without_replying() {
    let rec = Arc::new(Recorder::default());
    let driver = Arc::new(FakeDriver::failing(rec.clone()));
    let ctx = JobContext::new(RoomHandle::new("merchant-123"), driver);

    let err = entrypoint(ctx).await.unwrap_err();
    assert!(matches!(err, AgentError::Room(_)));
    assert!(rec.replies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_reply_before_start_is_an_error() {
    let rec = Arc::new(Recorder::default());
    let session = AgentSession::new(Arc::new(FakeDriver::ok(rec)), support_pipeline());

    let err = session.generate_reply("hello").await.unwrap_err();
    assert!(matches!(err, AgentError::Session(_)));
}

#[tokio::test]
async fn test_second_start_is_an_error() {
    let rec = Arc::new(Recorder::default());
    let session = AgentSession::new(Arc::new(FakeDriver::ok(rec.clone())), support_pipeline());
    let room = RoomHandle::new("merchant-123");
    let agent = Assistant::support_desk();

    session.start(&room, &agent, Default::default()).await.unwrap();
    let err = session.start(&room, &agent, Default::default()).await.unwrap_err();
    assert!(matches!(err, AgentError::Session(_)));
    assert_eq!(rec.starts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_close_ends_the_session() {
    let rec = Arc::new(Recorder::default());
    let session = AgentSession::new(Arc::new(FakeDriver::ok(rec.clone())), support_pipeline());
    let room = RoomHandle::new("merchant-123");

    session.start(&room, &Assistant::support_desk(), Default::default()).await.unwrap();
    session.close().await.unwrap();
    // Closing again is a no-op.
    session.close().await.unwrap();

    let err = session.generate_reply("hello").await.unwrap_err();
    assert!(matches!(err, AgentError::Session(_)));
    assert_eq!(rec.order.lock().unwrap().as_slice(), ["start", "close"]);
}

#[tokio::test]
async fn test_worker_dispatch_runs_the_registered_entrypoint() {
    let rec = Arc::new(Recorder::default());
    let worker =
        Worker::new(WorkerOptions::new(entrypoint), Arc::new(FakeDriver::ok(rec.clone())));

    worker.dispatch(RoomHandle::new("merchant-456")).await.unwrap();

    let starts = rec.starts.lock().unwrap();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].room.name(), "merchant-456");
}

#[tokio::test]
async fn test_worker_run_drains_the_queue_and_survives_job_failures() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let options = WorkerOptions::new(move |ctx: JobContext| {
        let seen = seen.clone();
        async move {
            seen.fetch_add(1, Ordering::SeqCst);
            if ctx.room().name() == "bad" {
                Err(AgentError::room("connection refused"))
            } else {
                Ok(())
            }
        }
    });
    let rec = Arc::new(Recorder::default());
    let worker = Worker::new(options, Arc::new(FakeDriver::ok(rec)));

    let (tx, rx) = mpsc::channel(4);
    tx.send(RoomHandle::new("bad")).await.unwrap();
    tx.send(RoomHandle::new("good")).await.unwrap();
    drop(tx);
    worker.run(rx).await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
