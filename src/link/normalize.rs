//! Canonical path form.

/// Normalize a link path: exactly one leading `/`, no trailing `/` unless the
/// path is the root, no runs of consecutive `/`.
///
/// Idempotent: normalizing an already-normalized path returns it unchanged.
pub fn normalize_path(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut path = String::with_capacity(raw.len() + 1);
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_duplicate_slashes() {
        assert_eq!(normalize_path("/sessions//abc123"), "/sessions/abc123");
        assert_eq!(normalize_path("//sessions///abc123"), "/sessions/abc123");
    }

    #[test]
    fn test_strips_trailing_slash() {
        assert_eq!(normalize_path("/sessions/abc123/"), "/sessions/abc123");
        assert_eq!(normalize_path("/sessions/"), "/sessions");
    }

    #[test]
    fn test_adds_leading_slash() {
        assert_eq!(normalize_path("sessions/abc123"), "/sessions/abc123");
    }

    #[test]
    fn test_root_forms() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_path("/sessions//abc123/");
        let twice = normalize_path(&once);
        assert_eq!(once, twice);
        assert_eq!(normalize_path("/sessions/abc123"), "/sessions/abc123");
    }
}
