//! Configuration management for the concierge services
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{env}.yaml)
//! - Environment variables (CONCIERGE__ prefix)
//!
//! API credentials for the agent runtime are NOT part of this configuration;
//! they are read from the runtime's own environment variable.

pub mod constants;
pub mod prompts;
pub mod settings;

pub use settings::{
    load_settings, AgentConfig, ConfigError, DataConfig, ObservabilityConfig, ServerConfig,
    Settings, VoiceConfig,
};
