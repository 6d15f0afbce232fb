//! Temporal context and momentary mood derivation.

pub mod state;
pub mod temporal;

pub use state::{compute_mood_state, MoodState};
pub use temporal::{DayKind, TemporalContext, TimeOfDay};
