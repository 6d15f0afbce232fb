//! Shared type definitions for the response synthesis pipeline.

pub mod archetype;
pub mod emotion;

pub use archetype::RoleArchetype;
pub use emotion::{EmotionalContext, EmotionalTone, EmpathyLevel, UrgencyLevel, UserMood};
