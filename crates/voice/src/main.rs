//! Voice concierge entry point

use std::sync::Arc;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use concierge_agent::{ConciergeAgent, OpenAiRuntime};
use concierge_config::{load_settings, prompts, Settings};
use concierge_tools::create_voice_registry;
use concierge_voice::{
    sample_rate_from_hz, ConciergePipeline, OpenAiSpeechToText, OpenAiTextToSpeech, VoiceLoop,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("CONCIERGE_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!("Starting voice concierge v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(create_voice_registry());
    let runtime = Arc::new(OpenAiRuntime::from_config(&settings.agent)?);
    let agent = Arc::new(ConciergeAgent::new(
        runtime,
        registry,
        prompts::VOICE_SYSTEM_PROMPT,
        settings.agent.max_tool_rounds,
    ));

    let stt = Arc::new(OpenAiSpeechToText::from_config(
        &settings.agent,
        &settings.voice,
    )?);
    let tts = Arc::new(OpenAiTextToSpeech::from_config(
        &settings.agent,
        &settings.voice,
    )?);

    let sample_rate = sample_rate_from_hz(settings.voice.sample_rate_hz)?;
    let pipeline = Arc::new(ConciergePipeline::new(
        stt,
        tts,
        agent,
        sample_rate.frame_size_20ms(),
    ));

    #[cfg(feature = "audio-io")]
    let sink = concierge_voice::CpalSink::open(sample_rate)?;
    #[cfg(not(feature = "audio-io"))]
    let sink = DiscardSink;

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, stopping after the current turn...");
            let _ = stop_tx.send(true);
        }
    });

    tracing::info!("Voice concierge is ready");
    VoiceLoop::new(pipeline, sink, sample_rate, settings.voice.input_buffer_secs)
        .run(stop_rx)
        .await?;

    Ok(())
}

/// Sink used when built without a playback device
#[cfg(not(feature = "audio-io"))]
struct DiscardSink;

#[cfg(not(feature = "audio-io"))]
impl concierge_voice::AudioSink for DiscardSink {
    fn write(&mut self, frame: &concierge_core::AudioFrame) -> concierge_core::Result<()> {
        tracing::debug!(samples = frame.samples.len(), "Discarding audio frame");
        Ok(())
    }
}

/// Initialize tracing from observability settings
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("concierge={}", level).into()
    });

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
