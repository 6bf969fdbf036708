//! Centralized constants for the concierge services
//!
//! Single source of truth for the fixed strings and audio parameters used
//! across the crates.

/// Hotel identity
pub mod hotel {
    /// Hotel display name used in prompts and the empty-shell default
    pub const NAME: &str = "Sea Breeze Beach House";

    /// Fixed contact email embedded in experience lookup responses
    pub const CONTACT_EMAIL: &str = "guestservices@sea-breeze.com";
}

/// Agent runtime defaults
pub mod runtime {
    /// Default model identifier (hardcoded, not environment-driven)
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Default OpenAI-compatible API base
    pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

    /// Upper bound on tool-call rounds per request
    pub const MAX_TOOL_ROUNDS: usize = 4;
}

/// Voice loop audio parameters
pub mod audio {
    /// Pipeline sample rate in Hz
    pub const SAMPLE_RATE_HZ: u32 = 24_000;

    /// Length of the placeholder input buffer, in seconds
    pub const INPUT_BUFFER_SECS: u64 = 3;

    /// Default speech-to-text model
    pub const STT_MODEL: &str = "gpt-4o-transcribe";

    /// Default text-to-speech model
    pub const TTS_MODEL: &str = "gpt-4o-mini-tts";

    /// Default text-to-speech voice
    pub const TTS_VOICE: &str = "alloy";
}
