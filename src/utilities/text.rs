//! Text helpers shared by the emotion classifier and the response validator.
//!
//! All matching in the pipeline is case-insensitive and whole-word: callers
//! lowercase once via [`tokenize`] / [`normalize`] and reuse the result.

/// Lowercase the input for phrase-level matching.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Split lowercased text into word tokens.
///
/// A token is a maximal run of alphanumeric characters plus inner
/// apostrophes, so "can't" stays one token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.trim_matches('\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Count whole-word occurrences of a multi-word phrase in lowercased text.
///
/// Substring hits that sit inside a larger word ("thanksgiving" for
/// "thanks") do not count.
pub fn phrase_count(lower: &str, phrase: &str) -> usize {
    lower
        .match_indices(phrase)
        .filter(|(start, _)| {
            let before_ok = *start == 0
                || lower[..*start]
                    .chars()
                    .next_back()
                    .map(|c| !c.is_alphanumeric())
                    .unwrap_or(true);
            let end = start + phrase.len();
            let after_ok = end == lower.len()
                || lower[end..]
                    .chars()
                    .next()
                    .map(|c| !c.is_alphanumeric())
                    .unwrap_or(true);
            before_ok && after_ok
        })
        .count()
}

/// Whether lowercased text contains the phrase as whole words.
pub fn contains_phrase(lower: &str, phrase: &str) -> bool {
    phrase_count(lower, phrase) > 0
}

/// Split text into sentences on terminal punctuation.
///
/// Empty fragments (consecutive punctuation, trailing periods) are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_contractions() {
        assert_eq!(tokenize("I can't, won't stop!"), vec!["i", "can't", "won't", "stop"]);
    }

    #[test]
    fn test_phrase_count_respects_boundaries() {
        let lower = "thanks for everything, thanksgiving was great";
        assert_eq!(phrase_count(lower, "thanks"), 1);
        assert_eq!(phrase_count(lower, "thank"), 0);
    }

    #[test]
    fn test_contains_phrase_multiword() {
        let lower = normalize("I want to end it all tonight");
        assert!(contains_phrase(&lower, "end it all"));
        assert!(!contains_phrase(&lower, "end it now"));
    }

    #[test]
    fn test_split_sentences_drops_empties() {
        assert_eq!(
            split_sentences("First. Second! Third?  "),
            vec!["First", "Second", "Third"]
        );
        assert!(split_sentences("...").is_empty());
    }
}
