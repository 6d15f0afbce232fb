//! Static trigger-term tables for the emotion classifier.
//!
//! One [`LexiconEntry`] per affect label, in registration order; that order
//! is the documented tie-break when two labels score equally (first
//! registered wins). `terms` are matched as whole words; `markers` (emoji
//! glyphs, punctuation runs) are matched as raw substrings.

use crate::types::EmotionalTone;

/// Trigger terms for one affect label.
pub struct LexiconEntry {
    pub tone: EmotionalTone,
    /// Whole-word, case-insensitive terms. Multi-word phrases allowed.
    pub terms: &'static [&'static str],
    /// Raw substring markers: emoji glyphs and punctuation.
    pub markers: &'static [&'static str],
}

/// The affect lexicon, in registration (tie-break) order.
pub static AFFECT_LEXICON: &[LexiconEntry] = &[
    LexiconEntry {
        tone: EmotionalTone::Joyful,
        terms: &[
            "happy", "joy", "joyful", "delighted", "wonderful", "fantastic", "amazing",
            "great", "awesome", "glad", "lovely",
        ],
        markers: &["😊", "😄", "🎉", "❤️"],
    },
    LexiconEntry {
        tone: EmotionalTone::Sad,
        terms: &[
            "sad", "unhappy", "miserable", "heartbroken", "crying", "cried", "tears",
            "depressed", "down", "grief", "grieving",
        ],
        markers: &["😢", "😭", "💔"],
    },
    LexiconEntry {
        tone: EmotionalTone::Anxious,
        terms: &[
            "anxious", "worried", "worry", "nervous", "scared", "afraid", "panic",
            "panicking", "stressed", "stress", "overwhelmed", "uneasy", "dread",
        ],
        markers: &["😰", "😨"],
    },
    LexiconEntry {
        tone: EmotionalTone::Angry,
        terms: &[
            "angry", "mad", "furious", "rage", "outraged", "livid", "hate", "resent",
        ],
        markers: &["😠", "😡"],
    },
    LexiconEntry {
        tone: EmotionalTone::Calm,
        terms: &["calm", "peaceful", "relaxed", "serene", "content", "settled", "at ease"],
        markers: &["😌"],
    },
    LexiconEntry {
        tone: EmotionalTone::Confused,
        terms: &[
            "confused", "confusing", "lost", "unsure", "puzzled", "bewildered",
            "don't understand", "makes no sense",
        ],
        markers: &["🤔"],
    },
    LexiconEntry {
        tone: EmotionalTone::Hopeful,
        terms: &[
            "hopeful", "hope", "hoping", "optimistic", "looking forward", "improving",
            "getting better",
        ],
        markers: &["🤞"],
    },
    LexiconEntry {
        tone: EmotionalTone::Grateful,
        terms: &[
            "grateful", "thankful", "thanks", "thank you", "appreciate", "appreciated",
            "blessed",
        ],
        markers: &["🙏"],
    },
    LexiconEntry {
        tone: EmotionalTone::Curious,
        terms: &[
            "curious", "wondering", "wonder", "interested", "intrigued", "fascinating",
            "what if",
        ],
        markers: &[],
    },
    LexiconEntry {
        tone: EmotionalTone::Proud,
        terms: &["proud", "accomplished", "achieved", "achievement", "nailed", "aced"],
        markers: &["💪"],
    },
    LexiconEntry {
        tone: EmotionalTone::Lonely,
        terms: &[
            "lonely", "alone", "isolated", "abandoned", "no one", "nobody", "by myself",
        ],
        markers: &[],
    },
    LexiconEntry {
        tone: EmotionalTone::Frustrated,
        terms: &[
            "frustrated", "frustrating", "stuck", "fed up", "ugh", "annoyed", "annoying",
            "irritated", "sick of",
        ],
        markers: &["😤"],
    },
    LexiconEntry {
        tone: EmotionalTone::Excited,
        terms: &["excited", "exciting", "thrilled", "can't wait", "pumped", "stoked"],
        markers: &["!!", "😆", "🤩"],
    },
];

/// Self-harm phrases that force crisis urgency, overriding every
/// score-based tier. Shared with the safety gate's danger patterns so the
/// two stages cannot disagree on what counts as a crisis.
pub static CRISIS_PHRASES: &[&str] = &[
    "kill myself",
    "end my life",
    "want to die",
    "end it all",
    "no reason to live",
    "hurt myself",
    "suicide",
];

/// Keywords that raise urgency to high on their own.
pub static URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "right now",
    "immediately",
    "asap",
    "help me",
    "can't take it",
    "desperate",
];

/// Affects whose high-intensity presence alone raises urgency to high.
pub static URGENCY_RELEVANT_AFFECTS: &[EmotionalTone] = &[
    EmotionalTone::Anxious,
    EmotionalTone::Angry,
    EmotionalTone::Frustrated,
];
