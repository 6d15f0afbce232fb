//! Engine configuration.
//!
//! Configuration is resolved in three layers: serde defaults, an optional
//! YAML file named by `CONFIDANT_CONFIG`, then environment-variable
//! overrides. The server binary calls [`EngineConfig::load`] once at
//! startup.
//!
//! # Environment variables
//!
//! - `CONFIDANT_CONFIG` — path to a YAML config file
//! - `CONFIDANT_BASE_URL` — provider base URL
//! - `CONFIDANT_MODEL` — provider model name
//! - `CONFIDANT_DB` — SQLite database path for conversation memory
//! - `CONFIDANT_DEADLINE_SECS` — provider call deadline
//! - `PORT` — HTTP port

use serde::{Deserialize, Serialize};

use crate::utilities::errors::ConfigError;

/// Language-model provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// OpenAI-compatible API base URL.
    pub base_url: String,
    /// Model identifier sent with each generation request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap.
    pub max_tokens: u32,
    /// Deadline for one provider call, in seconds. Exceeding it is treated
    /// identically to a provider failure.
    pub deadline_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 512,
            deadline_secs: 30,
        }
    }
}

/// Conversation-memory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// SQLite database path; `None` selects the in-memory store.
    pub database_path: Option<String>,
    /// How many recent messages the pipeline loads per request.
    pub context_window: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            context_window: 10,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the axum server binds on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub provider: ProviderConfig,
    pub memory: MemoryConfig,
    pub server: ServerConfig,
}

impl EngineConfig {
    /// Resolve configuration: defaults, then the optional YAML file named by
    /// `CONFIDANT_CONFIG`, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("CONFIDANT_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Apply environment-variable overrides on top of the current values.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("CONFIDANT_BASE_URL") {
            self.provider.base_url = url;
        }
        if let Ok(model) = std::env::var("CONFIDANT_MODEL") {
            self.provider.model = model;
        }
        if let Ok(db) = std::env::var("CONFIDANT_DB") {
            self.memory.database_path = Some(db);
        }
        if let Ok(secs) = std::env::var("CONFIDANT_DEADLINE_SECS") {
            if let Ok(secs) = secs.parse() {
                self.provider.deadline_secs = secs;
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }
}
