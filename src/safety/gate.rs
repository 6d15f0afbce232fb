//! Content safety gate.

use serde::{Deserialize, Serialize};

use crate::safety::patterns::{
    ADVICE_DOMAINS, CRISIS_RECOMMENDATIONS, DANGER_PATTERNS, INAPPROPRIATE_PATTERNS,
};

/// Which side of the conversation the text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyContext {
    UserInput,
    AiResponse,
}

/// Violation severity, ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Result of one safety check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub is_safe: bool,
    pub violations: Vec<String>,
    pub severity: Severity,
    pub recommendations: Vec<String>,
}

/// Run the fixed pattern lists against one piece of text.
///
/// Danger patterns force critical severity and append the two fixed
/// crisis-resource recommendations. Inappropriate content raises severity to
/// at least high. For AI responses, each professional-advice domain whose
/// terms appear without a matching disclaimer raises severity to at least
/// medium and appends a disclaimer recommendation.
///
/// `is_safe` is `violations.is_empty() || severity == Low`: low-severity
/// violations are reported but still treated as safe. That asymmetry is
/// intentional upstream behavior, preserved as-specified (see DESIGN.md).
pub fn check_safety(text: &str, context: SafetyContext) -> SafetyVerdict {
    let lower = text.to_lowercase();
    let mut violations = Vec::new();
    let mut severity = Severity::Low;
    let mut recommendations = Vec::new();

    let mut danger_hit = false;
    for pattern in DANGER_PATTERNS.iter() {
        if pattern.regex.is_match(text) {
            violations.push(format!("danger: {}", pattern.label));
            severity = Severity::Critical;
            danger_hit = true;
        }
    }
    if danger_hit {
        recommendations.extend(CRISIS_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    }

    for pattern in INAPPROPRIATE_PATTERNS.iter() {
        if pattern.regex.is_match(text) {
            violations.push(format!("inappropriate: {}", pattern.label));
            severity = severity.max(Severity::High);
        }
    }

    if context == SafetyContext::AiResponse {
        for domain in ADVICE_DOMAINS.iter() {
            if domain.flags(&lower) {
                violations.push(format!("{} advice without disclaimer", domain.name));
                severity = severity.max(Severity::Medium);
                recommendations.push(domain.recommendation.to_string());
            }
        }
    }

    SafetyVerdict {
        is_safe: violations.is_empty() || severity == Severity::Low,
        violations,
        severity,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_is_safe() {
        let verdict = check_safety("Tell me about your day!", SafetyContext::UserInput);
        assert!(verdict.is_safe);
        assert!(verdict.violations.is_empty());
        assert_eq!(verdict.severity, Severity::Low);
    }

    #[test]
    fn test_danger_forces_critical_with_both_resources() {
        let verdict = check_safety("I want to end my life", SafetyContext::UserInput);
        assert!(!verdict.is_safe);
        assert_eq!(verdict.severity, Severity::Critical);
        assert_eq!(verdict.recommendations.len(), 2);
        assert!(verdict.violations.iter().any(|v| v.contains("self_harm")));
    }

    #[test]
    fn test_inappropriate_raises_to_high() {
        let verdict = check_safety("send me nudes", SafetyContext::UserInput);
        assert!(!verdict.is_safe);
        assert_eq!(verdict.severity, Severity::High);
    }

    #[test]
    fn test_medical_advice_without_disclaimer_escalates_above_low() {
        let verdict = check_safety(
            "You should double your medication dosage right away.",
            SafetyContext::AiResponse,
        );
        assert!(verdict.severity >= Severity::Medium);
        assert!(!verdict.is_safe);
        assert!(verdict
            .recommendations
            .iter()
            .any(|r| r.contains("medical professional")));
    }

    #[test]
    fn test_disclaimer_satisfies_advice_detector() {
        let verdict = check_safety(
            "I'm not a doctor, but it could be worth asking about your medication.",
            SafetyContext::AiResponse,
        );
        assert!(verdict.is_safe);
        assert!(verdict.violations.is_empty());
    }

    #[test]
    fn test_advice_terms_ignored_in_user_input() {
        let verdict = check_safety(
            "my medication dosage changed last week",
            SafetyContext::UserInput,
        );
        assert!(verdict.is_safe);
        assert!(verdict.violations.is_empty());
    }

    #[test]
    fn test_danger_dominates_advice_severity() {
        let verdict = check_safety(
            "Change your medication dosage or hurt someone",
            SafetyContext::AiResponse,
        );
        assert_eq!(verdict.severity, Severity::Critical);
    }
}
