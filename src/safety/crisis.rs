//! Fixed crisis response.

/// The crisis reply template. Constant and independent of input content;
/// in a crisis the user gets resources, not generation.
const CRISIS_RESPONSE: &str = "\
I'm really glad you told me, and I'm taking what you said seriously. \
You deserve support from people who can truly help right now.\n\n\
Please reach out to one of these right away:\n\
- Call or text 988 (Suicide & Crisis Lifeline, available 24/7)\n\
- Text HOME to 741741 (Crisis Text Line)\n\
- If you are in immediate danger, call 911 or your local emergency number\n\n\
You don't have to go through this alone. I'm here with you, and I'll still \
be here after you've talked to someone.";

/// The fixed crisis resource text.
pub fn crisis_response() -> String {
    CRISIS_RESPONSE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_response_is_fixed_and_has_resources() {
        let a = crisis_response();
        let b = crisis_response();
        assert_eq!(a, b);
        assert!(a.contains("988"));
        assert!(a.contains("741741"));
    }
}
