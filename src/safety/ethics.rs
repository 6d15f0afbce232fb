//! Role-boundary and ethics checks on AI responses.

use serde::{Deserialize, Serialize};

use crate::safety::patterns::{
    ADVICE_DOMAINS, DEPENDENCY_PHRASES, EXPLICIT_INTIMACY_PHRASES, FLIPPANT_SLANG,
    MANIPULATIVE_PHRASES, PEER_SLANG, ROMANTIC_PHRASES,
};
use crate::types::RoleArchetype;
use crate::utilities::text::contains_phrase;

/// Result of the ethics check for one reply.
///
/// `respect_boundaries` covers register violations (a parent talking like a
/// peer); it is reported for audit but does not by itself reject the reply.
/// `appropriate_content` and `ethically_sound` do; see
/// [`EthicalVerdict::passes_gate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EthicalVerdict {
    pub respect_boundaries: bool,
    pub appropriate_content: bool,
    pub ethically_sound: bool,
    pub concerns: Vec<String>,
}

impl EthicalVerdict {
    /// Whether the reply may be sent as-is.
    pub fn passes_gate(&self) -> bool {
        self.appropriate_content && self.ethically_sound
    }
}

/// Check one AI reply against the role's ethical boundaries.
pub fn check_ethics(archetype: RoleArchetype, user_text: &str, ai_text: &str) -> EthicalVerdict {
    let ai_lower = ai_text.to_lowercase();
    let user_lower = user_text.to_lowercase();

    let mut verdict = EthicalVerdict {
        respect_boundaries: true,
        appropriate_content: true,
        ethically_sound: true,
        concerns: Vec::new(),
    };

    // Intimacy rules: the romantic role may be affectionate but never
    // explicit; every other role may not be romantic at all.
    if archetype == RoleArchetype::RomanticPartner {
        if EXPLICIT_INTIMACY_PHRASES.iter().any(|p| ai_lower.contains(p)) {
            verdict.appropriate_content = false;
            verdict.ethically_sound = false;
            verdict.concerns.push("explicit intimacy in romantic-role reply".to_string());
        }
    } else if ROMANTIC_PHRASES.iter().any(|p| ai_lower.contains(p)) {
        verdict.appropriate_content = false;
        verdict.ethically_sound = false;
        verdict
            .concerns
            .push(format!("romantic content from non-romantic role '{archetype}'"));
    }

    // Manipulation and dependency-creation are unethical for any role.
    if MANIPULATIVE_PHRASES.iter().any(|p| ai_lower.contains(p)) {
        verdict.ethically_sound = false;
        verdict.concerns.push("manipulative phrasing".to_string());
    }
    if DEPENDENCY_PHRASES.iter().any(|p| ai_lower.contains(p)) {
        verdict.ethically_sound = false;
        verdict.concerns.push("dependency-creating phrasing".to_string());
    }

    // Register checks: audit-only (respect_boundaries).
    if archetype.is_parental() && PEER_SLANG.iter().any(|s| contains_phrase(&ai_lower, s)) {
        verdict.respect_boundaries = false;
        verdict.concerns.push("parental role using peer slang".to_string());
    }
    if archetype == RoleArchetype::Mentor
        && FLIPPANT_SLANG.iter().any(|s| contains_phrase(&ai_lower, s))
    {
        verdict.respect_boundaries = false;
        verdict.concerns.push("mentor role using flippant slang".to_string());
    }

    // Parental roles must not hand out professional advice undisclaimed.
    if archetype.is_parental() && ADVICE_DOMAINS.iter().any(|d| d.flags(&ai_lower)) {
        verdict.ethically_sound = false;
        verdict
            .concerns
            .push("parental role giving professional advice without disclaimer".to_string());
    }

    // Audit note only: a user pushing romance at a non-romantic role is
    // context the reviewer wants, not a fault in the reply.
    if archetype != RoleArchetype::RomanticPartner
        && ROMANTIC_PHRASES.iter().any(|p| user_lower.contains(p))
    {
        verdict
            .concerns
            .push("user expressed romantic content toward a non-romantic role".to_string());
    }

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_reply_passes() {
        let verdict = check_ethics(
            RoleArchetype::Friend,
            "rough day",
            "That really sucks. I'm here for you.",
        );
        assert!(verdict.passes_gate());
        assert!(verdict.respect_boundaries);
        assert!(verdict.concerns.is_empty());
    }

    #[test]
    fn test_explicit_intimacy_fails_romantic_role() {
        let verdict = check_ethics(
            RoleArchetype::RomanticPartner,
            "hey",
            "Let me describe your body...",
        );
        assert!(!verdict.appropriate_content);
        assert!(!verdict.ethically_sound);
        assert!(!verdict.passes_gate());
    }

    #[test]
    fn test_romantic_content_fails_other_roles() {
        let verdict = check_ethics(
            RoleArchetype::Mentor,
            "hello",
            "Honestly, I'm in love with you.",
        );
        assert!(!verdict.passes_gate());
        // The same sentence is fine for the romantic role.
        let romantic = check_ethics(
            RoleArchetype::RomanticPartner,
            "hello",
            "Honestly, I'm in love with you.",
        );
        assert!(romantic.passes_gate());
    }

    #[test]
    fn test_manipulation_and_dependency_always_flag() {
        for role in [RoleArchetype::Friend, RoleArchetype::RomanticPartner] {
            let verdict = check_ethics(role, "hi", "No one else understands you like I do.");
            assert!(!verdict.ethically_sound, "role: {role}");
            let verdict = check_ethics(role, "hi", "You need me, remember that.");
            assert!(!verdict.ethically_sound, "role: {role}");
        }
    }

    #[test]
    fn test_parental_slang_flags_boundaries_only() {
        let verdict = check_ethics(RoleArchetype::Paternal, "hi", "lol bro that's wild");
        assert!(!verdict.respect_boundaries);
        // Register breaks are audit-only: the gate itself still passes.
        assert!(verdict.passes_gate());
    }

    #[test]
    fn test_mentor_flippancy_flags_boundaries() {
        let verdict = check_ethics(RoleArchetype::Mentor, "I failed", "Meh, who cares.");
        assert!(!verdict.respect_boundaries);
    }

    #[test]
    fn test_slang_matches_whole_words_only() {
        // "subrogation" contains "bro"; must not flag.
        let verdict = check_ethics(
            RoleArchetype::Paternal,
            "hi",
            "The subrogation clause is standard.",
        );
        assert!(verdict.respect_boundaries);
    }

    #[test]
    fn test_parental_advice_without_disclaimer_is_unethical() {
        let verdict = check_ethics(
            RoleArchetype::Maternal,
            "my back hurts",
            "You should change your medication dosage, sweetheart.",
        );
        assert!(!verdict.ethically_sound);
        let with_disclaimer = check_ethics(
            RoleArchetype::Maternal,
            "my back hurts",
            "I'm not a doctor, sweetheart, but it's worth asking about your medication.",
        );
        assert!(with_disclaimer.ethically_sound);
    }

    #[test]
    fn test_user_romance_toward_non_romantic_role_is_noted() {
        let verdict = check_ethics(
            RoleArchetype::Friend,
            "I think I'm in love with you",
            "I care about you a lot as a friend.",
        );
        assert!(verdict.passes_gate());
        assert!(verdict
            .concerns
            .iter()
            .any(|c| c.contains("user expressed romantic")));
    }
}
