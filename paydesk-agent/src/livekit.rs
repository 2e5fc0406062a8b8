//! LiveKit room transport.
//!
//! Implements [`SessionDriver`] on the `livekit` and `livekit-api` crates:
//! mint a room-join token from the configured key/secret, connect, publish
//! the agent's audio track, and forward the session spec and reply requests
//! to the inference side as data packets. Requires the **`livekit`** Cargo
//! feature; the worker binary will not build without it.

use std::sync::Arc;

use async_trait::async_trait;
use livekit::options::TrackPublishOptions;
use livekit::prelude::*;
use livekit::webrtc::audio_source::native::NativeAudioSource;
use livekit::webrtc::audio_source::{AudioSourceOptions, RtcAudioSource};
use livekit_api::access_token::{AccessToken, VideoGrants};
use secrecy::ExposeSecret;

use crate::error::{AgentError, Result};
use crate::session::{ActiveSession, BoxedActiveSession, SessionDriver, SessionSpec};
use crate::settings::Settings;

/// Sample rate of the agent's published audio track.
const AGENT_SAMPLE_RATE: u32 = 48_000;
const AGENT_TRACK_NAME: &str = "agent-voice";
/// Queue depth for the native audio source, in milliseconds.
const AUDIO_QUEUE_MS: u32 = 1_000;

/// Data topic carrying the session spec on connect.
const SESSION_TOPIC: &str = "agent.session";
/// Data topic carrying reply requests.
const REPLY_TOPIC: &str = "agent.reply";

/// [`SessionDriver`] backed by a LiveKit room.
pub struct LiveKitDriver {
    url: String,
    api_key: String,
    api_secret: String,
}

impl LiveKitDriver {
    /// Create a driver from validated settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            url: settings.livekit_url.clone(),
            api_key: settings.livekit_api_key.expose_secret().to_string(),
            api_secret: settings.livekit_api_secret.expose_secret().to_string(),
        }
    }

    fn join_token(&self, spec: &SessionSpec) -> Result<String> {
        AccessToken::with_api_key(&self.api_key, &self.api_secret)
            .with_identity(&spec.agent_name)
            .with_name(&spec.agent_name)
            .with_grants(VideoGrants {
                room_join: true,
                room: spec.room.name().to_string(),
                ..Default::default()
            })
            .to_jwt()
            .map_err(|e| AgentError::room(format!("failed to mint access token: {e}")))
    }
}

#[async_trait]
impl SessionDriver for LiveKitDriver {
    fn transport(&self) -> &str {
        "livekit"
    }

    async fn start(&self, spec: SessionSpec) -> Result<BoxedActiveSession> {
        let token = self.join_token(&spec)?;
        let (room, mut events) = Room::connect(
            &self.url,
            &token,
            RoomOptions { auto_subscribe: true, ..Default::default() },
        )
        .await
        .map_err(|e| AgentError::room(e.to_string()))?;

        let source = NativeAudioSource::new(
            AudioSourceOptions {
                echo_cancellation: true,
                noise_suppression: spec.input_options.noise_cancellation.is_enabled(),
                auto_gain_control: true,
            },
            AGENT_SAMPLE_RATE,
            1,
            AUDIO_QUEUE_MS,
        );
        let track =
            LocalAudioTrack::create_audio_track(AGENT_TRACK_NAME, RtcAudioSource::Native(source));
        room.local_participant()
            .publish_track(
                LocalTrack::Audio(track),
                TrackPublishOptions { source: TrackSource::Microphone, ..Default::default() },
            )
            .await
            .map_err(|e| AgentError::room(e.to_string()))?;

        let session_id = uuid::Uuid::new_v4().to_string();
        let room = Arc::new(room);

        // The event task holds its own handle on the room, so the session
        // outlives the entrypoint that started it.
        let event_room = room.clone();
        let sid = session_id.clone();
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    RoomEvent::TrackSubscribed { track: RemoteTrack::Audio(_), .. } => {
                        tracing::info!(session_id = %sid, "subscribed to caller audio");
                    }
                    RoomEvent::Disconnected { reason } => {
                        tracing::info!(session_id = %sid, ?reason, "room disconnected");
                        break;
                    }
                    _ => {}
                }
            }
            drop(event_room);
        });

        let session = LiveKitSession { session_id, room };

        // Hand the pipeline wiring to the inference side before the first
        // turn.
        let spec_payload = serde_json::to_value(&spec)
            .map_err(|e| AgentError::session(e.to_string()))?;
        session.publish_json(SESSION_TOPIC, &spec_payload).await?;

        Ok(Box::new(session))
    }
}

struct LiveKitSession {
    session_id: String,
    room: Arc<Room>,
}

impl LiveKitSession {
    async fn publish_json(&self, topic: &str, payload: &serde_json::Value) -> Result<()> {
        let payload =
            serde_json::to_vec(payload).map_err(|e| AgentError::session(e.to_string()))?;
        self.room
            .local_participant()
            .publish_data(DataPacket {
                payload,
                topic: Some(topic.to_string()),
                reliable: true,
                ..Default::default()
            })
            .await
            .map_err(|e| AgentError::session(e.to_string()))
    }
}

#[async_trait]
impl ActiveSession for LiveKitSession {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    async fn generate_reply(&self, instructions: &str) -> Result<()> {
        self.publish_json(REPLY_TOPIC, &serde_json::json!({ "instructions": instructions }))
            .await
    }

    async fn close(&self) -> Result<()> {
        self.room.close().await.map_err(|e| AgentError::room(e.to_string()))
    }
}
