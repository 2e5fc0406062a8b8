//! Worker binary: validate credentials, then run the job loop.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use paydesk_agent::livekit::LiveKitDriver;
use paydesk_agent::session::RoomHandle;
use paydesk_agent::settings::{self, Settings};
use paydesk_agent::worker::{Worker, WorkerOptions, entrypoint};

#[tokio::main]
async fn main() -> ExitCode {
    // .env.local first, then .env; already-set variables win either way.
    let loaded = settings::load_env_files();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = &loaded {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!(
                "{error}.\nCreate a .env.local file in the project folder (copy from \
                 .env.local.example) and fill in your credentials, then re-run the agent."
            );
            return ExitCode::FAILURE;
        }
    };

    let room = std::env::var("LIVEKIT_ROOM").unwrap_or_else(|_| "support-desk".to_string());

    let driver = Arc::new(LiveKitDriver::new(&settings));
    let worker = Worker::new(WorkerOptions::new(entrypoint), driver);

    let (jobs_tx, jobs_rx) = mpsc::channel(1);
    if jobs_tx.send(RoomHandle::new(room)).await.is_err() {
        tracing::error!("job queue closed before dispatch");
        return ExitCode::FAILURE;
    }
    drop(jobs_tx);
    worker.run(jobs_rx).await;

    // The session keeps running inside the transport; park until Ctrl-C.
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return ExitCode::FAILURE;
    }
    tracing::info!("shutting down");
    ExitCode::SUCCESS
}
