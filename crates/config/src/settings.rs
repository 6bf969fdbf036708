//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{audio, runtime};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config load error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Agent runtime configuration
    #[serde(default)]
    pub agent: AgentConfig,

    /// Voice loop configuration
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Data file paths
    #[serde(default)]
    pub data: DataConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.agent.model.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "agent.model".to_string(),
                message: "Model identifier cannot be empty".to_string(),
            });
        }

        if self.agent.max_tool_rounds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "agent.max_tool_rounds".to_string(),
                message: "At least one tool round is required".to_string(),
            });
        }

        if self.voice.input_buffer_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "voice.input_buffer_secs".to_string(),
                message: "Input buffer must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Permissive CORS (all origins, methods, headers)
    ///
    /// The demo frontend runs on an arbitrary origin, so this defaults on.
    #[serde(default = "default_true")]
    pub cors_permissive: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: true,
        }
    }
}

/// Agent runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Model identifier sent to the runtime
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sampling temperature
    #[serde(default)]
    pub temperature: f32,

    /// Maximum tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Upper bound on tool-call rounds per user message
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: usize,
}

fn default_model() -> String {
    runtime::DEFAULT_MODEL.to_string()
}
fn default_endpoint() -> String {
    runtime::DEFAULT_ENDPOINT.to_string()
}
fn default_max_tokens() -> usize {
    1024
}
fn default_timeout() -> u64 {
    60
}
fn default_max_tool_rounds() -> usize {
    runtime::MAX_TOOL_ROUNDS
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: 0.0,
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
            max_tool_rounds: default_max_tool_rounds(),
        }
    }
}

/// Voice loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Pipeline sample rate in Hz (input placeholder and output stream)
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: u32,

    /// Placeholder input buffer length in seconds
    #[serde(default = "default_input_buffer_secs")]
    pub input_buffer_secs: u64,

    /// Speech-to-text model identifier
    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    /// Text-to-speech model identifier
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Text-to-speech voice name
    #[serde(default = "default_tts_voice")]
    pub tts_voice: String,
}

fn default_sample_rate() -> u32 {
    audio::SAMPLE_RATE_HZ
}
fn default_input_buffer_secs() -> u64 {
    audio::INPUT_BUFFER_SECS
}
fn default_stt_model() -> String {
    audio::STT_MODEL.to_string()
}
fn default_tts_model() -> String {
    audio::TTS_MODEL.to_string()
}
fn default_tts_voice() -> String {
    audio::TTS_VOICE.to_string()
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: default_sample_rate(),
            input_buffer_secs: default_input_buffer_secs(),
            stt_model: default_stt_model(),
            tts_model: default_tts_model(),
            tts_voice: default_tts_voice(),
        }
    }
}

/// Data file paths
///
/// The embedded experience catalog is overridden separately, through the
/// `CONCIERGE_DATA_DIR` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Hotel data JSON; a missing file silently yields the empty-shell default
    #[serde(default = "default_hotel_data_path")]
    pub hotel_data_path: String,
}

fn default_hotel_data_path() -> String {
    "data/hotel_data.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            hotel_data_path: default_hotel_data_path(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (CONCIERGE__ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("CONCIERGE")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert!(settings.server.cors_permissive);
        assert_eq!(settings.agent.model, "gpt-4o-mini");
        assert_eq!(settings.agent.temperature, 0.0);
        assert_eq!(settings.voice.sample_rate_hz, 24000);
        assert_eq!(settings.voice.input_buffer_secs, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
        settings.server.port = 8000;

        settings.agent.model = String::new();
        assert!(settings.validate().is_err());
        settings.agent.model = "gpt-4o-mini".to_string();

        settings.agent.max_tool_rounds = 0;
        assert!(settings.validate().is_err());
        settings.agent.max_tool_rounds = 4;

        settings.voice.input_buffer_secs = 0;
        assert!(settings.validate().is_err());
        settings.voice.input_buffer_secs = 3;

        assert!(settings.validate().is_ok());
    }
}
