//! Identifier validation shared by the route table and the handlers.

/// Maximum accepted identifier length.
const MAX_ID_LEN: usize = 100;

fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Session identifiers: 1–100 characters of letters, digits, hyphen,
/// underscore.
pub fn is_valid_session_id(id: &str) -> bool {
    is_valid_identifier(id)
}

/// Notification identifiers follow the same rule as session identifiers.
pub fn is_valid_notification_id(id: &str) -> bool {
    is_valid_identifier(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_identifier_characters() {
        assert!(is_valid_session_id("abc123"));
        assert!(is_valid_session_id("a"));
        assert!(is_valid_session_id("a-b_C9"));
        assert!(is_valid_session_id(&"x".repeat(100)));
    }

    #[test]
    fn test_rejects_empty_and_overlong() {
        assert!(!is_valid_session_id(""));
        assert!(!is_valid_session_id(&"x".repeat(101)));
    }

    #[test]
    fn test_rejects_forbidden_characters() {
        assert!(!is_valid_session_id("has space"));
        assert!(!is_valid_session_id("user@host"));
        assert!(!is_valid_session_id("a/b"));
        assert!(!is_valid_notification_id("n.1"));
    }
}
