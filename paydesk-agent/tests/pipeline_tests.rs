//! Tests for pipeline configuration types.

use paydesk_agent::pipeline::{
    NoiseCancellation, PipelineConfig, RoomInputOptions, VadConfig, VadMode,
};

#[test]
fn test_builder_requires_every_endpoint() {
    let err = PipelineConfig::builder().llm("openai/gpt-4.1-mini").tts("voice").build();
    assert!(err.unwrap_err().to_string().contains("stt"));

    let err = PipelineConfig::builder().stt("stt").tts("voice").build();
    assert!(err.unwrap_err().to_string().contains("llm"));

    let err = PipelineConfig::builder().stt("stt").llm("llm").build();
    assert!(err.unwrap_err().to_string().contains("tts"));
}

#[test]
fn test_builder_defaults_to_server_vad() {
    let config = PipelineConfig::builder()
        .stt("deepgram/nova-2-general:en")
        .llm("openai/gpt-4.1-mini")
        .tts("cartesia/sonic-3:voice")
        .build()
        .unwrap();

    assert_eq!(config.vad, VadConfig::server_vad());
    assert_eq!(config.vad.mode, VadMode::ServerVad);
}

#[test]
fn test_vad_default_settings() {
    let vad = VadConfig::default();
    assert_eq!(vad.mode, VadMode::ServerVad);
    assert_eq!(vad.silence_duration_ms, Some(500));
    assert_eq!(vad.interrupt_response, Some(true));
    assert_eq!(vad.threshold, None);
}

#[test]
fn test_vad_builders() {
    let vad = VadConfig::server_vad().with_silence_duration(750).with_interrupt(false);
    assert_eq!(vad.silence_duration_ms, Some(750));
    assert_eq!(vad.interrupt_response, Some(false));

    assert_eq!(VadConfig::disabled().mode, VadMode::None);
}

#[test]
fn test_vad_serializes_mode_as_type_tag() {
    let json = serde_json::to_string(&VadConfig::server_vad()).unwrap();
    assert!(json.contains(r#""type":"server_vad""#));
    // Unset options stay off the wire.
    assert!(!json.contains("threshold"));
}

#[test]
fn test_noise_cancellation_wire_names() {
    assert_eq!(
        serde_json::to_value(NoiseCancellation::BvcTelephony).unwrap(),
        serde_json::json!("bvc_telephony")
    );
    assert_eq!(serde_json::to_value(NoiseCancellation::Bvc).unwrap(), serde_json::json!("bvc"));
}

#[test]
fn test_room_input_options() {
    assert_eq!(RoomInputOptions::default().noise_cancellation, NoiseCancellation::Off);
    assert!(!NoiseCancellation::Off.is_enabled());

    assert_eq!(RoomInputOptions::bvc().noise_cancellation, NoiseCancellation::Bvc);
    assert!(RoomInputOptions::bvc().noise_cancellation.is_enabled());
    assert!(RoomInputOptions::bvc_telephony().noise_cancellation.is_enabled());
}
