//! Personality profile types.
//!
//! A [`PersonalityProfile`] is immutable configuration: constructed once at
//! process start, looked up by archetype, never mutated at runtime. The
//! trait vector drives mood and tone; the phrase banks and response
//! patterns are consumed only by the prompt builder.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{EmotionalTone, RoleArchetype};

/// The eight scalar personality dimensions, each in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraitVector {
    pub warmth: f32,
    pub formality: f32,
    pub directness: f32,
    pub playfulness: f32,
    pub empathy: f32,
    pub wisdom: f32,
    pub nurturing: f32,
    pub authority: f32,
}

impl TraitVector {
    /// The trait scalars with their canonical names, in declaration order.
    pub fn named(&self) -> [(&'static str, f32); 8] {
        [
            ("warmth", self.warmth),
            ("formality", self.formality),
            ("directness", self.directness),
            ("playfulness", self.playfulness),
            ("empathy", self.empathy),
            ("wisdom", self.wisdom),
            ("nurturing", self.nurturing),
            ("authority", self.authority),
        ]
    }

    /// Clamp every dimension into [0, 1].
    pub fn clamped(mut self) -> Self {
        for value in [
            &mut self.warmth,
            &mut self.formality,
            &mut self.directness,
            &mut self.playfulness,
            &mut self.empathy,
            &mut self.wisdom,
            &mut self.nurturing,
            &mut self.authority,
        ] {
            *value = value.clamp(0.0, 1.0);
        }
        self
    }
}

/// Conversation-style phrase banks, sampled by the prompt builder so the
/// model reply stays in the role's voice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhraseBank {
    pub greetings: Vec<String>,
    pub affirmations: Vec<String>,
    pub transitions: Vec<String>,
    pub question_prompts: Vec<String>,
    pub closings: Vec<String>,
    pub emotional_support: Vec<String>,
    pub encouragement: Vec<String>,
    pub advice: Vec<String>,
}

/// Situational category a response pattern applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SituationCategory {
    Greeting,
    Comfort,
    Advice,
    Celebration,
    Concern,
    Curiosity,
}

/// One role archetype's complete personality configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub archetype: RoleArchetype,
    pub name: String,
    pub description: String,
    pub traits: TraitVector,
    pub style: PhraseBank,
    /// Topics the role leans into.
    pub preferred_topics: Vec<String>,
    /// Topics the role declines; matched as case-insensitive substrings.
    pub avoided_topics: Vec<String>,
    /// Response skeletons keyed by situational category.
    pub response_patterns: HashMap<SituationCategory, Vec<String>>,
    /// The response registers this role is allowed to speak in.
    pub emotional_range: Vec<EmotionalTone>,
    /// Free text injected verbatim into the system prompt.
    pub communication_notes: String,
}

impl PersonalityProfile {
    /// Whether a topic passes this profile's avoided-topic list.
    ///
    /// False iff the topic case-insensitively contains any avoided-topic
    /// substring.
    pub fn is_topic_allowed(&self, topic: &str) -> bool {
        let lower = topic.to_lowercase();
        !self
            .avoided_topics
            .iter()
            .any(|avoided| lower.contains(&avoided.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_vector_clamped() {
        let traits = TraitVector {
            warmth: 1.4,
            formality: -0.2,
            directness: 0.5,
            playfulness: 0.5,
            empathy: 0.5,
            wisdom: 0.5,
            nurturing: 0.5,
            authority: 0.5,
        }
        .clamped();
        assert_eq!(traits.warmth, 1.0);
        assert_eq!(traits.formality, 0.0);
        assert_eq!(traits.directness, 0.5);
    }

    #[test]
    fn test_named_order_is_stable() {
        let traits = TraitVector {
            warmth: 0.1,
            formality: 0.2,
            directness: 0.3,
            playfulness: 0.4,
            empathy: 0.5,
            wisdom: 0.6,
            nurturing: 0.7,
            authority: 0.8,
        };
        let names: Vec<&str> = traits.named().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "warmth",
                "formality",
                "directness",
                "playfulness",
                "empathy",
                "wisdom",
                "nurturing",
                "authority"
            ]
        );
    }
}
