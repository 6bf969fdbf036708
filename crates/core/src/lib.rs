//! Core traits and types for the concierge services
//!
//! This crate provides the foundational types used across all other crates:
//! - Chat message and tool-call types exchanged with the agent runtime
//! - Audio frame types for the voice loop
//! - Seam traits for external collaborators (agent runtime, STT, TTS)
//! - Error types

pub mod audio;
pub mod chat;
pub mod error;
pub mod traits;

pub use audio::{AudioFrame, Channels, SampleRate};
pub use chat::{AgentTurn, Message, Role, ToolDefinition, ToolInvocation};
pub use error::{Error, Result};
pub use traits::{AgentRuntime, SpeechToText, TextToSpeech, Transcript};
