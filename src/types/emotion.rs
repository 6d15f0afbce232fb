//! Closed affect and response-register vocabulary.
//!
//! Every component that emits or consumes a "tone" restricts itself to
//! [`EmotionalTone`]; free-form tone strings never cross a module boundary.
//! The enum covers two families: affect labels detected in user text, and
//! response registers the engine replies in. Keeping both in one closed set
//! lets tone maps stay total and exhaustively matched.

use serde::{Deserialize, Serialize};

/// Closed set of emotional tones used across the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTone {
    // --- User affect labels (detected by the classifier) ---
    Joyful,
    Sad,
    Anxious,
    Angry,
    Calm,
    Confused,
    Hopeful,
    Grateful,
    Curious,
    Proud,
    Lonely,
    Frustrated,
    Excited,
    Neutral,

    // --- Response registers (emitted by mood model / tone modulator) ---
    Supportive,
    Comforting,
    Warm,
    Wise,
    Playful,
    Gentle,
    Encouraging,
    Nurturing,
    Empathetic,
    Reassuring,
    Cheerful,
    Celebratory,
}

impl EmotionalTone {
    /// Lowercase human-readable name, used in prompts and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Joyful => "joyful",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Angry => "angry",
            Self::Calm => "calm",
            Self::Confused => "confused",
            Self::Hopeful => "hopeful",
            Self::Grateful => "grateful",
            Self::Curious => "curious",
            Self::Proud => "proud",
            Self::Lonely => "lonely",
            Self::Frustrated => "frustrated",
            Self::Excited => "excited",
            Self::Neutral => "neutral",
            Self::Supportive => "supportive",
            Self::Comforting => "comforting",
            Self::Warm => "warm",
            Self::Wise => "wise",
            Self::Playful => "playful",
            Self::Gentle => "gentle",
            Self::Encouraging => "encouraging",
            Self::Nurturing => "nurturing",
            Self::Empathetic => "empathetic",
            Self::Reassuring => "reassuring",
            Self::Cheerful => "cheerful",
            Self::Celebratory => "celebratory",
        }
    }

    /// Whether this is a positive-valence affect label.
    ///
    /// Drives the sentiment-score numerator in the classifier.
    pub fn is_positive_affect(self) -> bool {
        matches!(
            self,
            Self::Joyful
                | Self::Calm
                | Self::Hopeful
                | Self::Grateful
                | Self::Curious
                | Self::Proud
                | Self::Excited
        )
    }

    /// Whether this is a negative-valence affect label.
    pub fn is_negative_affect(self) -> bool {
        matches!(
            self,
            Self::Sad | Self::Anxious | Self::Angry | Self::Confused | Self::Lonely | Self::Frustrated
        )
    }
}

impl std::fmt::Display for EmotionalTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Overall read of the user's mood for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserMood {
    Positive,
    Negative,
    Neutral,
    /// Positive and negative affects both scored, e.g. "happy but worried".
    Mixed,
}

/// How much empathic framing the reply should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmpathyLevel {
    Low,
    Medium,
    High,
}

/// Urgency tier for one inbound message.
///
/// `Crisis` forces an immediate, pipeline-short-circuiting response
/// regardless of any other computed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Crisis,
}

/// Per-message emotional read, produced fresh by the classifier.
///
/// Never persisted as mutable state; it is logged and stored alongside the
/// message it describes, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalContext {
    /// Highest-scoring affect label.
    pub primary_emotion: EmotionalTone,
    /// Intensity of the primary label in [0, 1].
    pub emotion_intensity: f32,
    /// Up to two next-highest non-zero affects.
    pub secondary_emotions: Vec<EmotionalTone>,
    /// Overall valence read of the message.
    pub user_mood: UserMood,
    /// Empathic framing the reply should carry.
    pub empathy_level: EmpathyLevel,
    /// Urgency tier; `Crisis` short-circuits the pipeline.
    pub urgency: UrgencyLevel,
    /// Signed sentiment in [-1, 1].
    pub sentiment_score: f32,
}

impl EmotionalContext {
    /// Neutral context returned for empty or matchless input.
    pub fn neutral() -> Self {
        Self {
            primary_emotion: EmotionalTone::Neutral,
            emotion_intensity: 0.0,
            secondary_emotions: Vec::new(),
            user_mood: UserMood::Neutral,
            empathy_level: EmpathyLevel::Low,
            urgency: UrgencyLevel::Low,
            sentiment_score: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affect_valence_is_disjoint() {
        let all = [
            EmotionalTone::Joyful,
            EmotionalTone::Sad,
            EmotionalTone::Anxious,
            EmotionalTone::Angry,
            EmotionalTone::Calm,
            EmotionalTone::Confused,
            EmotionalTone::Hopeful,
            EmotionalTone::Grateful,
            EmotionalTone::Curious,
            EmotionalTone::Proud,
            EmotionalTone::Lonely,
            EmotionalTone::Frustrated,
            EmotionalTone::Excited,
            EmotionalTone::Neutral,
        ];
        for tone in all {
            assert!(
                !(tone.is_positive_affect() && tone.is_negative_affect()),
                "{} is both positive and negative",
                tone
            );
        }
        assert!(!EmotionalTone::Neutral.is_positive_affect());
        assert!(!EmotionalTone::Neutral.is_negative_affect());
    }

    #[test]
    fn test_urgency_ordering() {
        assert!(UrgencyLevel::Crisis > UrgencyLevel::High);
        assert!(UrgencyLevel::High > UrgencyLevel::Medium);
        assert!(UrgencyLevel::Medium > UrgencyLevel::Low);
    }

    #[test]
    fn test_tone_serde_snake_case() {
        let json = serde_json::to_string(&EmotionalTone::Comforting).unwrap();
        assert_eq!(json, "\"comforting\"");
        let back: EmotionalTone = serde_json::from_str("\"joyful\"").unwrap();
        assert_eq!(back, EmotionalTone::Joyful);
    }
}
