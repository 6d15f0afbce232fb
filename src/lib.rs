//! # confidant
//!
//! Contextual response synthesis engine for companion-chat backends.
//!
//! One inbound user message becomes one role-consistent, emotionally
//! appropriate, safety-checked reply. The pipeline composes a rule-based
//! emotion classifier, a personality registry, a temporal mood model, a
//! tone modulator, a cultural-adaptation layer, and a safety/ethics gate
//! under a single orchestrator that owns the crisis and fallback
//! short-circuits. The surrounding CRUD service (accounts, uploads, admin)
//! lives outside this crate; conversation memory, relationship data, and
//! the language-model provider are consumed through traits.

pub mod culture;
pub mod emotion;
pub mod llm;
pub mod memory;
pub mod mood;
pub mod orchestrator;
pub mod personality;
pub mod prompt;
pub mod relationship;
pub mod safety;
pub mod server;
pub mod tone;
pub mod types;
pub mod utilities;

pub use orchestrator::{EngineResponse, ResponseEngine, ResponseMetadata};
pub use personality::PersonalityRegistry;
pub use types::{EmotionalContext, EmotionalTone, RoleArchetype};
pub use utilities::{EngineConfig, EngineError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
