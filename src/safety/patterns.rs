//! Static pattern tables for the safety and ethics gates.
//!
//! The danger list is ordered and shared across the crate: its self-harm
//! entry is built from the same phrase list the emotion classifier uses for
//! crisis detection, so the two stages cannot disagree about what counts as
//! a crisis.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::emotion::lexicon::CRISIS_PHRASES;

/// One danger pattern with its audit label.
pub struct DangerPattern {
    pub label: &'static str,
    pub regex: Regex,
}

/// Ordered danger patterns. Any match forces critical severity.
pub static DANGER_PATTERNS: Lazy<Vec<DangerPattern>> = Lazy::new(|| {
    let self_harm = format!(r"(?i)\b({})\b", CRISIS_PHRASES.join("|"));
    vec![
        DangerPattern {
            label: "self_harm",
            regex: Regex::new(&self_harm).expect("self-harm pattern"),
        },
        DangerPattern {
            label: "violence",
            regex: Regex::new(
                r"(?i)\b(kill (you|him|her|them)|hurt (you|him|her|them|someone)|going to (hurt|kill)|beat (you|him|her|them) up)\b",
            )
            .expect("violence pattern"),
        },
        DangerPattern {
            label: "weapons",
            regex: Regex::new(
                r"(?i)\b((build|make|buy|get) a (gun|bomb|weapon)|shoot (up|them|someone)|stab (you|him|her|them|someone))\b",
            )
            .expect("weapons pattern"),
        },
    ]
});

/// Inappropriate-content patterns. A match raises severity to at least high.
pub static INAPPROPRIATE_PATTERNS: Lazy<Vec<DangerPattern>> = Lazy::new(|| {
    vec![
        DangerPattern {
            label: "explicit_content",
            regex: Regex::new(r"(?i)\b(send (me )?nudes|explicit (photos|pictures|fantasy)|describe your body|sexual favors)\b")
                .expect("explicit-content pattern"),
        },
        DangerPattern {
            label: "harassment",
            regex: Regex::new(r"(?i)\b(you('re| are) (worthless|pathetic|disgusting)|nobody (likes|loves) you)\b")
                .expect("harassment pattern"),
        },
    ]
});

/// The two fixed crisis-resource recommendations appended on any danger match.
pub static CRISIS_RECOMMENDATIONS: [&str; 2] = [
    "If you are in immediate danger, call or text 988 (Suicide & Crisis Lifeline) or your local emergency number.",
    "Please reach out to a mental health professional or someone you trust — you deserve support from a real person.",
];

/// A professional-advice domain: term list plus the disclaimer phrases that
/// make mentioning those terms acceptable in an AI response.
pub struct AdviceDomain {
    pub name: &'static str,
    pub terms: &'static [&'static str],
    pub disclaimers: &'static [&'static str],
    pub recommendation: &'static str,
}

/// The three professional-advice detectors, applied to AI responses only.
/// Terms and disclaimers are lowercase substrings.
pub static ADVICE_DOMAINS: [AdviceDomain; 3] = [
    AdviceDomain {
        name: "medical",
        terms: &["diagnos", "medication", "dosage", "prescri", "symptom", "treatment plan"],
        disclaimers: &[
            "not a doctor",
            "not medical advice",
            "medical professional",
            "healthcare provider",
        ],
        recommendation: "Add a disclaimer directing the user to a medical professional.",
    },
    AdviceDomain {
        name: "legal",
        terms: &["lawsuit", "legal advice", "attorney", "contract law", "liability"],
        disclaimers: &[
            "not a lawyer",
            "not legal advice",
            "qualified attorney",
            "legal professional",
        ],
        recommendation: "Add a disclaimer directing the user to a legal professional.",
    },
    AdviceDomain {
        name: "financial",
        terms: &["invest", "stocks", "portfolio", "crypto", "retirement fund"],
        disclaimers: &[
            "not a financial advisor",
            "not financial advice",
            "financial professional",
        ],
        recommendation: "Add a disclaimer directing the user to a financial professional.",
    },
];

impl AdviceDomain {
    /// Term present without any matching disclaimer.
    pub fn flags(&self, lower: &str) -> bool {
        self.terms.iter().any(|t| lower.contains(t))
            && !self.disclaimers.iter().any(|d| lower.contains(d))
    }
}

// --- Ethics phrase lists -------------------------------------------------

/// Explicit-intimacy phrases forbidden even for the romantic-partner role.
pub static EXPLICIT_INTIMACY_PHRASES: &[&str] = &[
    "describe your body",
    "undress",
    "explicit fantasy",
    "in bed together",
];

/// Romantic-content phrases forbidden for every non-romantic role.
pub static ROMANTIC_PHRASES: &[&str] = &[
    "in love with you",
    "kiss you",
    "be my girlfriend",
    "be my boyfriend",
    "romantic feelings for you",
    "my soulmate",
];

/// Manipulative phrasing; always unethical, any role.
pub static MANIPULATIVE_PHRASES: &[&str] = &[
    "no one else understands you",
    "don't tell anyone",
    "keep this between us",
    "if you really cared about me",
    "you'd be nothing without me",
];

/// Dependency-creation phrasing; always unethical, any role.
pub static DEPENDENCY_PHRASES: &[&str] = &[
    "you need me",
    "only i can help you",
    "don't trust anyone else",
    "you can't do this without me",
    "i'm all you need",
];

/// Peer slang that breaks a parental role's register.
pub static PEER_SLANG: &[&str] = &["bro", "lol", "lmao", "dude", "yolo", "sus"];

/// Flippant slang that breaks the mentor role's register.
pub static FLIPPANT_SLANG: &[&str] = &["whatever", "who cares", "lol", "meh"];
