//! Rule-based emotion classifier.
//!
//! [`classify`] is a pure function of the input text and the static lexicon:
//! no external state, no randomness, trivially unit-testable. It never
//! fails; empty input and matchless input degrade to a neutral context.

use crate::emotion::lexicon::{
    AFFECT_LEXICON, CRISIS_PHRASES, URGENCY_KEYWORDS, URGENCY_RELEVANT_AFFECTS,
};
use crate::types::{EmotionalContext, EmotionalTone, EmpathyLevel, UrgencyLevel, UserMood};
use crate::utilities::text::{contains_phrase, normalize, phrase_count, tokenize};

/// Score one message against the affect lexicon and derive the full
/// per-message emotional context.
///
/// Ties between equally-scored labels resolve to the first-registered
/// lexicon entry (accepted tie-break; [`AFFECT_LEXICON`] order is load-bearing).
pub fn classify(text: &str) -> EmotionalContext {
    let lower = normalize(text);
    let tokens = tokenize(text);

    // Score every affect in registration order.
    let scores: Vec<(EmotionalTone, usize)> = AFFECT_LEXICON
        .iter()
        .map(|entry| {
            let term_hits: usize = entry
                .terms
                .iter()
                .map(|term| term_score(&lower, &tokens, term))
                .sum();
            let marker_hits: usize = entry
                .markers
                .iter()
                .map(|marker| lower.matches(marker).count())
                .sum();
            (entry.tone, term_hits + marker_hits)
        })
        .collect();

    let mut context = derive_context(&scores);
    context.urgency = derive_urgency(&lower, context.primary_emotion, context.emotion_intensity);
    context.empathy_level = derive_empathy(&context);
    context
}

/// Whole-word count for single words, boundary-checked count for phrases.
fn term_score(lower: &str, tokens: &[String], term: &str) -> usize {
    if term.contains(' ') {
        phrase_count(lower, term)
    } else {
        tokens.iter().filter(|t| t.as_str() == term).count()
    }
}

fn derive_context(scores: &[(EmotionalTone, usize)]) -> EmotionalContext {
    // Strict > keeps the first-registered winner on ties.
    let mut primary: Option<(EmotionalTone, usize)> = None;
    for &(tone, score) in scores {
        if score > 0 && primary.map(|(_, best)| score > best).unwrap_or(true) {
            primary = Some((tone, score));
        }
    }

    let Some((primary_emotion, primary_score)) = primary else {
        return EmotionalContext::neutral();
    };

    // Next two highest non-zero, non-primary scores; the stable sort keeps
    // registration order between equal scores.
    let mut rest: Vec<(EmotionalTone, usize)> = scores
        .iter()
        .copied()
        .filter(|&(tone, score)| score > 0 && tone != primary_emotion)
        .collect();
    rest.sort_by(|a, b| b.1.cmp(&a.1));
    let secondary_emotions: Vec<EmotionalTone> =
        rest.iter().take(2).map(|&(tone, _)| tone).collect();

    let positive: usize = scores
        .iter()
        .filter(|(tone, _)| tone.is_positive_affect())
        .map(|&(_, score)| score)
        .sum();
    let negative: usize = scores
        .iter()
        .filter(|(tone, _)| tone.is_negative_affect())
        .map(|&(_, score)| score)
        .sum();

    let sentiment_score =
        ((positive as f32 - negative as f32) / 10.0).clamp(-1.0, 1.0);

    let user_mood = if positive > 0 && negative > 0 {
        UserMood::Mixed
    } else if positive > 0 {
        UserMood::Positive
    } else if negative > 0 {
        UserMood::Negative
    } else {
        UserMood::Neutral
    };

    EmotionalContext {
        primary_emotion,
        emotion_intensity: (primary_score as f32 / 3.0).min(1.0),
        secondary_emotions,
        user_mood,
        // Filled in by the caller once urgency is known.
        empathy_level: EmpathyLevel::Low,
        urgency: UrgencyLevel::Low,
        sentiment_score,
    }
}

/// Crisis phrases override everything; urgency keywords or a high-intensity
/// urgency-relevant affect raise to high; otherwise urgency scales with
/// intensity.
fn derive_urgency(lower: &str, primary: EmotionalTone, intensity: f32) -> UrgencyLevel {
    if CRISIS_PHRASES.iter().any(|p| contains_phrase(lower, p)) {
        return UrgencyLevel::Crisis;
    }
    let keyword_hit = URGENCY_KEYWORDS.iter().any(|p| contains_phrase(lower, p));
    let affect_hit = URGENCY_RELEVANT_AFFECTS.contains(&primary) && intensity > 0.8;
    if keyword_hit || affect_hit {
        UrgencyLevel::High
    } else if intensity > 0.6 {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

fn derive_empathy(context: &EmotionalContext) -> EmpathyLevel {
    let negative = context.primary_emotion.is_negative_affect();
    let intense = context.emotion_intensity > 0.5;
    if context.urgency >= UrgencyLevel::High || (negative && intense) {
        EmpathyLevel::High
    } else if negative || intense {
        EmpathyLevel::Medium
    } else {
        EmpathyLevel::Low
    }
}
