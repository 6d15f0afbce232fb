//! Personality registry.
//!
//! Registry content is fixed at construction and read-only afterward, so
//! concurrent reads from simultaneous requests need no locking. The shared
//! built-in registry lives in a `Lazy` static; callers that need custom
//! roles build their own registry with [`PersonalityRegistry::with_profiles`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::personality::bank::builtin_profiles;
use crate::personality::profile::PersonalityProfile;
use crate::types::RoleArchetype;
use crate::utilities::errors::EngineError;

/// Trait-label thresholds for [`PersonalityRegistry::describe_traits`].
const LOW_THRESHOLD: f32 = 0.3;
const HIGH_THRESHOLD: f32 = 0.7;

/// Low/high descriptors per trait, in [`crate::personality::profile::TraitVector::named`] order.
const TRAIT_LABELS: [(&str, &str); 8] = [
    ("reserved", "deeply warm"),
    ("casual", "formal"),
    ("gentle in approach", "very direct"),
    ("serious", "playful"),
    ("pragmatic", "highly empathetic"),
    ("spontaneous", "wise and measured"),
    ("hands-off", "nurturing"),
    ("egalitarian", "authoritative"),
];

static BUILTIN: Lazy<PersonalityRegistry> = Lazy::new(PersonalityRegistry::new);

/// Immutable archetype → profile lookup.
#[derive(Debug, Clone)]
pub struct PersonalityRegistry {
    profiles: HashMap<RoleArchetype, PersonalityProfile>,
}

impl Default for PersonalityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalityRegistry {
    /// Registry holding the six built-in profiles.
    pub fn new() -> Self {
        Self {
            profiles: builtin_profiles()
                .into_iter()
                .map(|p| (p.archetype, p))
                .collect(),
        }
    }

    /// The process-wide built-in registry.
    pub fn builtin() -> &'static PersonalityRegistry {
        &BUILTIN
    }

    /// Built-in profiles plus caller-supplied ones (e.g. a `Custom` role).
    /// Later entries replace earlier ones for the same archetype.
    pub fn with_profiles(extra: Vec<PersonalityProfile>) -> Self {
        let mut registry = Self::new();
        for profile in extra {
            registry.profiles.insert(profile.archetype, profile);
        }
        registry
    }

    /// Look up the profile for a role.
    ///
    /// An unknown archetype is a hard error; the pipeline must not silently
    /// substitute a different personality.
    pub fn get(&self, archetype: RoleArchetype) -> Result<&PersonalityProfile, EngineError> {
        self.profiles
            .get(&archetype)
            .ok_or(EngineError::ProfileNotFound { archetype })
    }

    /// Render the trait vector as a human-readable block for the prompt.
    ///
    /// Each scalar maps to its low label (< 0.3), its high label (> 0.7), or
    /// `balanced (low–high)` in between.
    pub fn describe_traits(&self, archetype: RoleArchetype) -> Result<String, EngineError> {
        let profile = self.get(archetype)?;
        let lines: Vec<String> = profile
            .traits
            .named()
            .iter()
            .zip(TRAIT_LABELS.iter())
            .map(|(&(name, value), &(low, high))| {
                let label = if value < LOW_THRESHOLD {
                    low.to_string()
                } else if value > HIGH_THRESHOLD {
                    high.to_string()
                } else {
                    format!("balanced ({low}\u{2013}{high})")
                };
                format!("- {name}: {label}")
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Whether the role will engage with a topic.
    pub fn is_topic_allowed(&self, archetype: RoleArchetype, topic: &str) -> Result<bool, EngineError> {
        Ok(self.get(archetype)?.is_topic_allowed(topic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::bank::friend;

    #[test]
    fn test_unknown_archetype_is_hard_error() {
        let registry = PersonalityRegistry::new();
        let err = registry.get(RoleArchetype::Custom).unwrap_err();
        assert!(matches!(
            err,
            EngineError::ProfileNotFound {
                archetype: RoleArchetype::Custom
            }
        ));
    }

    #[test]
    fn test_with_profiles_registers_custom_role() {
        let mut custom = friend();
        custom.archetype = RoleArchetype::Custom;
        custom.name = "Custom Companion".to_string();
        let registry = PersonalityRegistry::with_profiles(vec![custom]);
        assert_eq!(
            registry.get(RoleArchetype::Custom).unwrap().name,
            "Custom Companion"
        );
        // Built-ins are still present.
        assert!(registry.get(RoleArchetype::Friend).is_ok());
    }

    #[test]
    fn test_describe_traits_thresholds() {
        let registry = PersonalityRegistry::new();
        let text = registry.describe_traits(RoleArchetype::Sibling).unwrap();
        // playfulness 0.9 > 0.7 → high label
        assert!(text.contains("- playfulness: playful"), "{text}");
        // formality 0.1 < 0.3 → low label
        assert!(text.contains("- formality: casual"), "{text}");
        // warmth 0.7 is between thresholds → balanced
        assert!(text.contains("- warmth: balanced (reserved\u{2013}deeply warm)"), "{text}");
    }

    #[test]
    fn test_topic_gate_is_substring_case_insensitive() {
        let registry = PersonalityRegistry::new();
        assert!(!registry
            .is_topic_allowed(RoleArchetype::Mentor, "Office GOSSIP roundup")
            .unwrap());
        assert!(registry
            .is_topic_allowed(RoleArchetype::Mentor, "career planning")
            .unwrap());
    }

    #[test]
    fn test_builtin_registry_is_shared() {
        let a = PersonalityRegistry::builtin();
        let b = PersonalityRegistry::builtin();
        assert!(std::ptr::eq(a, b));
    }
}
