//! Shared error type

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the seam traits
///
/// Failures of the external agent runtime, STT, or TTS are not retried or
/// classified further anywhere in this repository; they propagate to the
/// HTTP layer or the voice loop as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Agent runtime rejected or failed a completion request
    #[error("agent runtime error: {0}")]
    Runtime(String),

    /// Speech-to-text failure
    #[error("speech-to-text error: {0}")]
    SpeechToText(String),

    /// Text-to-speech failure
    #[error("text-to-speech error: {0}")]
    TextToSpeech(String),

    /// Audio device failure
    #[error("audio device error: {0}")]
    AudioDevice(String),

    /// Response payload did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}
