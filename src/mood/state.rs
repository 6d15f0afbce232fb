//! Momentary mood model.
//!
//! A [`MoodState`] is derived fresh every turn from the personality trait
//! vector, the last ~10 emotion labels in history, and the temporal
//! context, never independently persisted. Each field is an independent
//! deterministic formula over the same inputs; the monotonic direction of
//! every listed effect (night lowers energy, weekends raise it, longer
//! history fatigues, absence lowers engagement) is load-bearing and pinned
//! by tests.

use serde::{Deserialize, Serialize};

use crate::mood::temporal::{DayKind, TemporalContext, TimeOfDay};
use crate::personality::TraitVector;
use crate::types::EmotionalTone;

/// How many trailing history entries the volatility window inspects.
const VOLATILITY_WINDOW: usize = 10;
/// How many trailing history entries the consistency window inspects.
const CONSISTENCY_WINDOW: usize = 5;

/// The companion's momentary mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodState {
    /// Current response register.
    pub current_mood: EmotionalTone,
    /// Energy level in [0, 1].
    pub energy: f32,
    /// Engagement level in [0, 1].
    pub engagement: f32,
    /// Emotional consistency in [0, 1].
    pub consistency: f32,
    /// Emotional volatility in [0, 1].
    pub volatility: f32,
}

/// Derive the momentary mood.
///
/// `history` is ordered oldest → newest and should hold the emotion labels
/// of the most recent messages (the model only reads the trailing windows).
pub fn compute_mood_state(
    traits: &TraitVector,
    history: &[EmotionalTone],
    temporal: &TemporalContext,
    user_primary: EmotionalTone,
) -> MoodState {
    MoodState {
        current_mood: current_mood(traits, temporal, user_primary),
        energy: energy(temporal, history.len()),
        engagement: engagement(temporal, history.len()),
        consistency: consistency(traits, history),
        volatility: volatility(history),
    }
}

/// Base mood from the highest qualifying trait threshold, then dampened at
/// night or boosted in the morning. A negative user emotion dampens a
/// playful base the same way night does; playfulness is the wrong register
/// for someone hurting.
fn current_mood(
    traits: &TraitVector,
    temporal: &TemporalContext,
    user_primary: EmotionalTone,
) -> EmotionalTone {
    let base = if traits.warmth > 0.7 && traits.empathy > 0.7 {
        EmotionalTone::Warm
    } else if traits.playfulness > 0.7 {
        EmotionalTone::Playful
    } else if traits.wisdom > 0.7 {
        EmotionalTone::Wise
    } else if traits.nurturing > 0.7 {
        EmotionalTone::Nurturing
    } else {
        EmotionalTone::Supportive
    };

    let time_adjusted = match temporal.time_of_day {
        TimeOfDay::Night => match base {
            EmotionalTone::Playful => EmotionalTone::Gentle,
            EmotionalTone::Joyful => EmotionalTone::Calm,
            other => other,
        },
        TimeOfDay::Morning => match base {
            EmotionalTone::Calm => EmotionalTone::Encouraging,
            other => other,
        },
        _ => base,
    };

    if user_primary.is_negative_affect() && time_adjusted == EmotionalTone::Playful {
        EmotionalTone::Gentle
    } else {
        time_adjusted
    }
}

fn energy(temporal: &TemporalContext, history_len: usize) -> f32 {
    let mut energy: f32 = 0.7;
    match temporal.time_of_day {
        TimeOfDay::Morning => energy += 0.2,
        TimeOfDay::Night => energy -= 0.3,
        _ => {}
    }
    // Long conversations fatigue, up to a floor.
    energy -= (history_len as f32 / 20.0).min(0.3);
    if temporal.day_kind == DayKind::Weekend {
        energy += 0.1;
    }
    energy.clamp(0.0, 1.0)
}

fn engagement(temporal: &TemporalContext, history_len: usize) -> f32 {
    let mut engagement: f32 = 0.7;
    engagement += (history_len as f32 / 10.0).min(0.2);
    if temporal.is_long_idle() {
        engagement -= 0.2;
    }
    if temporal.day_kind == DayKind::Weekend {
        engagement += 0.1;
    }
    engagement.clamp(0.0, 1.0)
}

/// Average of the trait anchor (authority + wisdom) and the recent
/// emotional spread. Short histories read as fully consistent.
fn consistency(traits: &TraitVector, history: &[EmotionalTone]) -> f32 {
    if history.len() < 3 {
        return 1.0;
    }
    let trait_anchor = (traits.authority + traits.wisdom) / 2.0;
    let window_start = history.len().saturating_sub(CONSISTENCY_WINDOW);
    let window = &history[window_start..];
    let mut distinct: Vec<EmotionalTone> = Vec::with_capacity(window.len());
    for &tone in window {
        if !distinct.contains(&tone) {
            distinct.push(tone);
        }
    }
    let spread = 1.0 - (distinct.len() as f32 / CONSISTENCY_WINDOW as f32);
    ((trait_anchor + spread) / 2.0).clamp(0.0, 1.0)
}

/// Fraction of adjacent-entry emotion changes over the trailing window.
fn volatility(history: &[EmotionalTone]) -> f32 {
    let window_start = history.len().saturating_sub(VOLATILITY_WINDOW);
    let window = &history[window_start..];
    if window.len() < 2 {
        return 0.0;
    }
    let changes = window.windows(2).filter(|pair| pair[0] != pair[1]).count();
    (changes as f32 / (VOLATILITY_WINDOW - 1) as f32).clamp(0.0, 1.0)
}
