//! Voice concierge service
//!
//! The interaction loop, its pipeline, the audio output sink, and the
//! OpenAI speech endpoint clients.

pub mod pipeline;
pub mod sink;
pub mod speech;
pub mod voice_loop;

pub use pipeline::{ConciergePipeline, VoiceEvent, VoicePipeline, VoiceStream};
pub use sink::AudioSink;
#[cfg(feature = "audio-io")]
pub use sink::CpalSink;
pub use speech::{OpenAiSpeechToText, OpenAiTextToSpeech};
pub use voice_loop::{sample_rate_from_hz, VoiceError, VoiceLoop};
