//! Voice pipeline
//!
//! One pipeline run takes one input frame through transcription, the agent,
//! and synthesis, and streams the resulting events back. The synthesized
//! reply is split into short chunks so playback starts before the whole
//! frame is written.

use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;

use concierge_agent::ConciergeAgent;
use concierge_core::{AudioFrame, Error, Result, SpeechToText, TextToSpeech, Transcript};

/// Events emitted while a pipeline run streams back
#[derive(Debug, Clone)]
pub enum VoiceEvent {
    /// What the input was heard as
    Transcript(Transcript),
    /// A chunk of synthesized reply audio, in playback order
    Audio(AudioFrame),
}

/// Stream of pipeline events
pub type VoiceStream = Pin<Box<dyn Stream<Item = Result<VoiceEvent>> + Send>>;

/// A runnable voice pipeline
pub trait VoicePipeline: Send + Sync {
    /// Process one input frame; events stream back until the run is done
    fn run(&self, input: AudioFrame) -> VoiceStream;
}

/// STT → agent → TTS pipeline
pub struct ConciergePipeline {
    stt: Arc<dyn SpeechToText>,
    tts: Arc<dyn TextToSpeech>,
    agent: Arc<ConciergeAgent>,
    chunk_samples: usize,
}

impl ConciergePipeline {
    pub fn new(
        stt: Arc<dyn SpeechToText>,
        tts: Arc<dyn TextToSpeech>,
        agent: Arc<ConciergeAgent>,
        chunk_samples: usize,
    ) -> Self {
        Self {
            stt,
            tts,
            agent,
            chunk_samples,
        }
    }
}

impl VoicePipeline for ConciergePipeline {
    fn run(&self, input: AudioFrame) -> VoiceStream {
        let stt = self.stt.clone();
        let tts = self.tts.clone();
        let agent = self.agent.clone();
        let chunk_samples = self.chunk_samples;

        async_stream::try_stream! {
            let transcript = stt.transcribe(&input).await?;
            tracing::debug!(text = %transcript.text, model = stt.model_name(), "Transcribed input");
            yield VoiceEvent::Transcript(transcript.clone());

            let reply = agent
                .process(&transcript.text)
                .await
                .map_err(|e| Error::runtime(e.to_string()))?;

            let audio = tts.synthesize(&reply).await?;
            for chunk in audio.split(chunk_samples) {
                yield VoiceEvent::Audio(chunk);
            }
        }
        .boxed()
    }
}
