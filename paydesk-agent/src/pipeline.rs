//! Configuration types for the per-session media pipeline.
//!
//! A pipeline names four provider endpoints: a speech-to-text model, a
//! language model, a text-to-speech voice, and a voice-activity-detection
//! configuration. The descriptors are provider-qualified strings (for
//! example `deepgram/nova-2-general:en`); resolving them is the transport's
//! job, not ours.

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};

/// Voice Activity Detection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VadMode {
    /// Server-side VAD (default).
    #[default]
    ServerVad,
    /// No automatic VAD - manual turn management.
    None,
}

/// VAD configuration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VadConfig {
    /// VAD mode to use.
    #[serde(rename = "type")]
    pub mode: VadMode,
    /// Silence duration (ms) before considering speech ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silence_duration_ms: Option<u32>,
    /// Detection threshold (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,
    /// Prefix padding (ms) to include before detected speech.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_padding_ms: Option<u32>,
    /// Whether to interrupt the assistant when the user starts speaking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupt_response: Option<bool>,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            mode: VadMode::ServerVad,
            silence_duration_ms: Some(500),
            threshold: None,
            prefix_padding_ms: None,
            interrupt_response: Some(true),
        }
    }
}

impl VadConfig {
    /// Create a server VAD config with default settings.
    pub fn server_vad() -> Self {
        Self::default()
    }

    /// Create a config with VAD disabled.
    pub fn disabled() -> Self {
        Self { mode: VadMode::None, ..Default::default() }
    }

    /// Set silence duration threshold.
    pub fn with_silence_duration(mut self, ms: u32) -> Self {
        self.silence_duration_ms = Some(ms);
        self
    }

    /// Set whether to interrupt on user speech.
    pub fn with_interrupt(mut self, interrupt: bool) -> Self {
        self.interrupt_response = Some(interrupt);
        self
    }
}

/// Noise-cancellation mode applied to room input audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoiseCancellation {
    /// No noise cancellation.
    #[default]
    Off,
    /// Broadband voice cancellation for WebRTC channels.
    Bvc,
    /// Narrowband tuning for telephony audio.
    BvcTelephony,
}

impl NoiseCancellation {
    /// Whether any cancellation filter is active.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// Input options applied when a session binds to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoomInputOptions {
    /// Noise-cancellation mode for inbound audio.
    pub noise_cancellation: NoiseCancellation,
}

impl RoomInputOptions {
    /// Broadband voice cancellation, the default for WebRTC channels.
    pub fn bvc() -> Self {
        Self { noise_cancellation: NoiseCancellation::Bvc }
    }

    /// Telephony-tuned cancellation for phone channels.
    pub fn bvc_telephony() -> Self {
        Self { noise_cancellation: NoiseCancellation::BvcTelephony }
    }
}

/// Provider endpoints wired together for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Speech-to-text model descriptor.
    pub stt: String,
    /// Language-model descriptor.
    pub llm: String,
    /// Text-to-speech voice descriptor.
    pub tts: String,
    /// Voice-activity-detection configuration.
    pub vad: VadConfig,
}

impl PipelineConfig {
    /// Create a builder for PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for [`PipelineConfig`].
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    stt: Option<String>,
    llm: Option<String>,
    tts: Option<String>,
    vad: Option<VadConfig>,
}

impl PipelineConfigBuilder {
    /// Set the speech-to-text model descriptor.
    pub fn stt(mut self, descriptor: impl Into<String>) -> Self {
        self.stt = Some(descriptor.into());
        self
    }

    /// Set the language-model descriptor.
    pub fn llm(mut self, descriptor: impl Into<String>) -> Self {
        self.llm = Some(descriptor.into());
        self
    }

    /// Set the text-to-speech voice descriptor.
    pub fn tts(mut self, descriptor: impl Into<String>) -> Self {
        self.tts = Some(descriptor.into());
        self
    }

    /// Set the VAD configuration.
    pub fn vad(mut self, vad: VadConfig) -> Self {
        self.vad = Some(vad);
        self
    }

    /// Build the configuration.
    ///
    /// The three endpoint descriptors are required; VAD defaults to server
    /// VAD when unset.
    pub fn build(self) -> Result<PipelineConfig> {
        let stt = self.stt.ok_or_else(|| AgentError::config("stt endpoint is required"))?;
        let llm = self.llm.ok_or_else(|| AgentError::config("llm endpoint is required"))?;
        let tts = self.tts.ok_or_else(|| AgentError::config("tts endpoint is required"))?;
        Ok(PipelineConfig { stt, llm, tts, vad: self.vad.unwrap_or_default() })
    }
}
