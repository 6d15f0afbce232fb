//! Response quality validation.
//!
//! Quality issues are warnings: the orchestrator logs them and sends the
//! reply anyway. Nothing here blocks a response.

use serde::{Deserialize, Serialize};

use crate::utilities::text::{split_sentences, tokenize};

/// Bounds on an acceptable reply.
const MIN_LENGTH: usize = 10;
const MAX_LENGTH: usize = 2000;
/// A single token may not account for more than this share of all tokens.
const MAX_TOKEN_SHARE: f32 = 0.2;
/// Mean adjacent-sentence vocabulary overlap below this reads as incoherent.
const MIN_COHERENCE: f32 = 0.3;

/// Literal placeholder markers that must never reach the user.
static PLACEHOLDER_MARKERS: &[&str] = &["[placeholder]", "[insert", "{{", "}}", "<template>"];

/// Outcome of validating one reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseValidation {
    pub valid: bool,
    pub issues: Vec<String>,
}

/// Check one reply for quality issues.
pub fn validate_response(text: &str) -> ResponseValidation {
    let mut issues = Vec::new();

    let length = text.chars().count();
    if length < MIN_LENGTH {
        issues.push(format!("too short: {length} chars"));
    }
    if length > MAX_LENGTH {
        issues.push(format!("too long: {length} chars"));
    }

    let tokens = tokenize(text);
    if !tokens.is_empty() {
        let total = tokens.len() as f32;
        let mut sorted = tokens.clone();
        sorted.sort();
        let mut run_start = 0;
        for i in 1..=sorted.len() {
            if i == sorted.len() || sorted[i] != sorted[run_start] {
                let share = (i - run_start) as f32 / total;
                if share > MAX_TOKEN_SHARE && i - run_start > 1 {
                    issues.push(format!(
                        "excessive repetition: '{}' is {:.0}% of tokens",
                        sorted[run_start],
                        share * 100.0
                    ));
                }
                run_start = i;
            }
        }
    }

    let sentences = split_sentences(text);
    if sentences.len() >= 2 {
        let overlap = mean_adjacent_overlap(&sentences);
        if overlap < MIN_COHERENCE {
            issues.push(format!("low coherence: {:.0}% adjacent overlap", overlap * 100.0));
        }
    }

    let lower = text.to_lowercase();
    for marker in PLACEHOLDER_MARKERS {
        if lower.contains(marker) {
            issues.push(format!("placeholder marker present: {marker}"));
        }
    }

    ResponseValidation {
        valid: issues.is_empty(),
        issues,
    }
}

/// Mean over adjacent sentence pairs of shared-vocabulary ratio, where the
/// ratio is |shared distinct words| / min(|vocab a|, |vocab b|).
fn mean_adjacent_overlap(sentences: &[&str]) -> f32 {
    let vocabularies: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| {
            let mut words = tokenize(s);
            words.sort();
            words.dedup();
            words
        })
        .collect();

    let mut total = 0.0;
    let mut pairs = 0;
    for pair in vocabularies.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.is_empty() || b.is_empty() {
            continue;
        }
        let shared = a.iter().filter(|word| b.contains(word)).count();
        total += shared as f32 / a.len().min(b.len()) as f32;
        pairs += 1;
    }
    if pairs == 0 {
        1.0
    } else {
        total / pairs as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasonable_reply_is_valid() {
        let validation = validate_response(
            "Today sounds like it was heavy for you. Tell me what made today feel so heavy for you?",
        );
        assert!(validation.valid, "issues: {:?}", validation.issues);
    }

    #[test]
    fn test_too_short_flags() {
        let validation = validate_response("ok");
        assert!(!validation.valid);
        assert!(validation.issues[0].contains("too short"));
    }

    #[test]
    fn test_too_long_flags() {
        let validation = validate_response(&"very long reply. ".repeat(200));
        assert!(validation.issues.iter().any(|i| i.contains("too long")));
    }

    #[test]
    fn test_excessive_repetition_flags() {
        let validation = validate_response("well well well well well, that is a surprise");
        assert!(validation
            .issues
            .iter()
            .any(|i| i.contains("excessive repetition")));
    }

    #[test]
    fn test_placeholder_marker_flags() {
        let validation = validate_response("Dear {{name}}, I hope your day is going well today.");
        assert!(validation
            .issues
            .iter()
            .any(|i| i.contains("placeholder marker")));
    }

    #[test]
    fn test_disjoint_sentences_flag_low_coherence() {
        let validation =
            validate_response("Quantum flux precipitates rapidly. Bananas prefer jazz music.");
        assert!(validation.issues.iter().any(|i| i.contains("low coherence")));
    }

    #[test]
    fn test_single_sentence_skips_coherence() {
        let validation = validate_response("One perfectly coherent standalone sentence here.");
        assert!(validation.valid, "issues: {:?}", validation.issues);
    }

    #[test]
    fn test_empty_text_flags_short_only() {
        let validation = validate_response("");
        assert!(!validation.valid);
        assert_eq!(validation.issues.len(), 1);
    }
}
