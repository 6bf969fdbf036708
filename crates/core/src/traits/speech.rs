//! Speech processing traits

use async_trait::async_trait;

use crate::audio::AudioFrame;
use crate::Result;

/// Transcription result
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    /// Confidence in [0.0, 1.0], if the backend reports one
    pub confidence: Option<f32>,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }
}

/// Speech-to-Text interface
///
/// Conversion itself happens in an external system; implementations here are
/// thin clients or test mocks.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe a single audio frame
    async fn transcribe(&self, audio: &AudioFrame) -> Result<Transcript>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

/// Text-to-Speech interface
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize text to a single audio frame
    async fn synthesize(&self, text: &str) -> Result<AudioFrame>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}
