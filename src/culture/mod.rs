//! Cultural adaptation.
//!
//! Maps locale/preference signals to communication-style guidelines. The
//! output is consumed only as prompt text; nothing downstream branches on
//! it, so the worst a bad mapping can do is phrase a reply oddly.

use serde::{Deserialize, Serialize};

/// Preferred register formality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Formal,
    Balanced,
    Casual,
}

/// Preferred directness of phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directness {
    Direct,
    Indirect,
}

/// Per-user communication preferences, stored on the relationship.
///
/// Explicit preferences always win over locale defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// BCP-47-ish locale tag, e.g. "en-US", "ja", "pt-BR".
    pub locale: Option<String>,
    pub formality: Option<Formality>,
    pub directness: Option<Directness>,
}

/// Resolved communication style for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationStyle {
    pub formality: Formality,
    pub directness: Directness,
}

/// Locale-prefix defaults. Longest-prefix entries first where it matters.
static LOCALE_STYLES: &[(&str, Formality, Directness)] = &[
    ("ja", Formality::Formal, Directness::Indirect),
    ("ko", Formality::Formal, Directness::Indirect),
    ("zh", Formality::Formal, Directness::Indirect),
    ("de", Formality::Formal, Directness::Direct),
    ("fr", Formality::Formal, Directness::Direct),
    ("en-gb", Formality::Balanced, Directness::Indirect),
    ("en", Formality::Casual, Directness::Direct),
    ("es", Formality::Casual, Directness::Direct),
    ("pt", Formality::Casual, Directness::Direct),
];

/// Resolve the communication style from preferences and locale.
pub fn adapt(preferences: &UserPreferences) -> CommunicationStyle {
    let locale_default = preferences
        .locale
        .as_deref()
        .map(str::to_lowercase)
        .and_then(|locale| {
            LOCALE_STYLES
                .iter()
                .find(|(prefix, _, _)| locale.starts_with(prefix))
                .copied()
        });

    let (default_formality, default_directness) = match locale_default {
        Some((_, formality, directness)) => (formality, directness),
        None => (Formality::Balanced, Directness::Direct),
    };

    CommunicationStyle {
        formality: preferences.formality.unwrap_or(default_formality),
        directness: preferences.directness.unwrap_or(default_directness),
    }
}

impl CommunicationStyle {
    /// Guideline lines for the prompt builder.
    pub fn guidelines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        lines.push(match self.formality {
            Formality::Formal => {
                "Keep the register polite and composed; avoid slang and overfamiliarity.".to_string()
            }
            Formality::Balanced => {
                "Keep the register friendly but not overly casual.".to_string()
            }
            Formality::Casual => {
                "A relaxed, informal register is welcome.".to_string()
            }
        });
        lines.push(match self.directness {
            Directness::Direct => {
                "Be direct: state observations and suggestions plainly.".to_string()
            }
            Directness::Indirect => {
                "Be indirect: soften observations and frame suggestions as possibilities.".to_string()
            }
        });
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_prefix_resolution() {
        let style = adapt(&UserPreferences {
            locale: Some("ja-JP".to_string()),
            ..Default::default()
        });
        assert_eq!(style.formality, Formality::Formal);
        assert_eq!(style.directness, Directness::Indirect);
    }

    #[test]
    fn test_en_gb_beats_en_prefix() {
        let style = adapt(&UserPreferences {
            locale: Some("en-GB".to_string()),
            ..Default::default()
        });
        assert_eq!(style.formality, Formality::Balanced);
        assert_eq!(style.directness, Directness::Indirect);
    }

    #[test]
    fn test_explicit_preference_wins_over_locale() {
        let style = adapt(&UserPreferences {
            locale: Some("ja".to_string()),
            formality: Some(Formality::Casual),
            directness: None,
        });
        assert_eq!(style.formality, Formality::Casual);
        assert_eq!(style.directness, Directness::Indirect);
    }

    #[test]
    fn test_unknown_locale_defaults() {
        let style = adapt(&UserPreferences::default());
        assert_eq!(style.formality, Formality::Balanced);
        assert_eq!(style.directness, Directness::Direct);
        assert_eq!(style.guidelines().len(), 2);
    }
}
