//! Error types for the response synthesis engine.
//!
//! Only the fatal/not-found taxonomy surfaces to callers. Safety-critical
//! conditions and provider unavailability are resolved inside the
//! orchestrator with substitute replies and never appear here.

use thiserror::Error;

use crate::types::RoleArchetype;

/// Errors surfaced by [`crate::orchestrator::ResponseEngine`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller referenced a relationship that does not exist.
    #[error("Relationship not found: {id}")]
    RelationshipNotFound { id: String },

    /// No personality profile is registered for the relationship's role.
    ///
    /// This is a hard error; the pipeline never silently defaults to a
    /// different personality.
    #[error("No personality profile registered for role '{archetype}'")]
    ProfileNotFound { archetype: RoleArchetype },

    /// Conversation-memory read or append failed.
    #[error("Conversation memory error: {0}")]
    Memory(#[from] anyhow::Error),
}

/// Errors from loading engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::utilities::config::EngineConfig`].
    #[error("Cannot parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
