//! Log sanitization utilities
//!
//! Catalog responses carry long inscription and provenance texts; debug and
//! error logs only ever receive a bounded prefix of a body.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 512;

/// Truncate a string for safe logging.
///
/// Returns the original string if it has at most `TRUNCATE_LIMIT` characters,
/// otherwise the first `TRUNCATE_LIMIT` characters followed by a suffix giving
/// the total byte length. Counting is done on `char`s so multi-byte text is
/// never split.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!(
            "{}... [truncated, total {} bytes]",
            &s[..cut],
            s.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "{\"data\":[]}";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"a".repeat(TRUNCATE_LIMIT)));
        assert!(result.contains(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(TRUNCATE_LIMIT + 1);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.starts_with(&"é".repeat(TRUNCATE_LIMIT)));
    }
}
