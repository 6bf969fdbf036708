//! Seam traits for external collaborators
//!
//! The reasoning loop, speech recognition, and speech synthesis are all
//! provided by external systems; these traits are the only surface this
//! repository depends on.

mod runtime;
mod speech;

pub use runtime::AgentRuntime;
pub use speech::{SpeechToText, TextToSpeech, Transcript};
