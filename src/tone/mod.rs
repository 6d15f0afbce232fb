//! Tone modulation.
//!
//! [`modulate`] combines the user's emotional read, the momentary mood, the
//! temporal context, and the role into a final response tone + intensity,
//! with a human-readable rationale entry appended per triggered rule. The
//! rule order is fixed so rationale lists are reproducible; every tone map
//! is total via identity fallback: an unmapped tone passes through
//! unchanged, never an error.

use serde::{Deserialize, Serialize};

use crate::mood::{MoodState, TemporalContext, TimeOfDay};
use crate::types::{EmotionalContext, EmotionalTone, RoleArchetype, UserMood};

/// Starting intensity before the adjustment rules run.
const BASE_INTENSITY: f32 = 0.8;

/// Conversations older than this many exchanged messages blend intensity
/// toward the mood's consistency.
const LONG_CONVERSATION: usize = 10;

/// The modulated tone for one reply, with the audit trail of why.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneModulation {
    pub base_tone: EmotionalTone,
    pub modified_tone: EmotionalTone,
    /// Final intensity in [0, 1].
    pub intensity: f32,
    /// One entry per triggered rule, in rule order.
    pub reasons: Vec<String>,
}

/// Apply the adjustment rules in their fixed order.
pub fn modulate(
    base_tone: EmotionalTone,
    mood: &MoodState,
    temporal: &TemporalContext,
    user_emotion: &EmotionalContext,
    archetype: RoleArchetype,
) -> ToneModulation {
    let mut tone = base_tone;
    let mut intensity = BASE_INTENSITY;
    let mut reasons = Vec::new();

    if mood.energy < 0.3 {
        tone = soften(tone);
        intensity *= 0.7;
        reasons.push("low energy: softened tone and reduced intensity".to_string());
    }

    if mood.engagement > 0.8 {
        intensity = (intensity * 1.2).min(1.0);
        reasons.push("high engagement: raised intensity".to_string());
    }

    if user_emotion.user_mood == UserMood::Negative
        || user_emotion.primary_emotion.is_negative_affect()
    {
        tone = comfort(tone);
        reasons.push(format!(
            "user sounds {}: shifted toward comfort",
            user_emotion.primary_emotion
        ));
    }

    if temporal.time_of_day == TimeOfDay::Morning && archetype.is_peer_like() {
        tone = energize(tone);
        reasons.push("morning with a peer role: energized tone".to_string());
    }

    if temporal.time_of_day == TimeOfDay::Night {
        tone = night_calm(tone);
        intensity *= 0.8;
        reasons.push("late night: calmer tone and lower intensity".to_string());
    }

    if temporal.is_long_idle() {
        tone = EmotionalTone::Warm;
        reasons.push("long absence: re-warming the conversation".to_string());
    }

    if temporal.relationship_age_days < 7 {
        intensity *= 0.8;
        reasons.push("young relationship: easing intensity".to_string());
    }

    if temporal.conversation_length > LONG_CONVERSATION {
        intensity = (intensity + mood.consistency) / 2.0;
        reasons.push("long conversation: blending intensity toward consistency".to_string());
    }

    ToneModulation {
        base_tone,
        modified_tone: tone,
        intensity: intensity.clamp(0.0, 1.0),
        reasons,
    }
}

/// Soften map for low-energy replies.
fn soften(tone: EmotionalTone) -> EmotionalTone {
    match tone {
        EmotionalTone::Playful => EmotionalTone::Gentle,
        EmotionalTone::Celebratory => EmotionalTone::Warm,
        EmotionalTone::Encouraging => EmotionalTone::Supportive,
        EmotionalTone::Cheerful => EmotionalTone::Calm,
        EmotionalTone::Joyful => EmotionalTone::Calm,
        other => other,
    }
}

/// Comfort map for negative user emotion.
fn comfort(tone: EmotionalTone) -> EmotionalTone {
    match tone {
        EmotionalTone::Playful => EmotionalTone::Gentle,
        EmotionalTone::Cheerful => EmotionalTone::Supportive,
        EmotionalTone::Celebratory => EmotionalTone::Warm,
        EmotionalTone::Joyful => EmotionalTone::Warm,
        EmotionalTone::Wise => EmotionalTone::Empathetic,
        EmotionalTone::Supportive => EmotionalTone::Comforting,
        EmotionalTone::Warm => EmotionalTone::Comforting,
        other => other,
    }
}

/// Energize map for peer roles in the morning.
fn energize(tone: EmotionalTone) -> EmotionalTone {
    match tone {
        EmotionalTone::Calm => EmotionalTone::Cheerful,
        EmotionalTone::Gentle => EmotionalTone::Playful,
        EmotionalTone::Supportive => EmotionalTone::Encouraging,
        other => other,
    }
}

/// Calm map for late-night replies.
fn night_calm(tone: EmotionalTone) -> EmotionalTone {
    match tone {
        EmotionalTone::Playful => EmotionalTone::Gentle,
        EmotionalTone::Cheerful => EmotionalTone::Calm,
        EmotionalTone::Encouraging => EmotionalTone::Supportive,
        EmotionalTone::Celebratory => EmotionalTone::Warm,
        other => other,
    }
}
