//! Input validation guard.
//!
//! Raw inputs arrive as text (the forms allow empty/partial entry). A field
//! is usable only if its trimmed text parses as a non-negative integer.
//! Parse failures are not errors: the owning stage simply declines to
//! recompute, keeping its previous result.
//!
//! Parsing is strict: `"12abc"`, `"+3"`, `"-1"`, and `""` are all invalid.

/// Parse one raw field as a non-negative integer count.
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

/// Parse all of a stage's fields, or `None` if any field is unusable.
///
/// `expected` is the number of fields the stage declares; a mismatched form
/// is treated the same as a parse failure.
pub fn parse_fields(fields: &[String], expected: usize) -> Option<Vec<u32>> {
    if fields.len() != expected {
        return None;
    }
    fields.iter().map(|f| parse_count(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_accepts_plain_digits() {
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count("  7 "), Some(7));
        assert_eq!(parse_count("042"), Some(42));
    }

    #[test]
    fn parse_count_rejects_everything_else() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("   "), None);
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("12abc"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("+3"), None);
        assert_eq!(parse_count("3.5"), None);
        // Larger than u32.
        assert_eq!(parse_count("99999999999999999999"), None);
    }

    #[test]
    fn parse_fields_is_all_or_nothing() {
        let fields = vec!["3".to_string(), "abc".to_string()];
        assert_eq!(parse_fields(&fields, 2), None);

        let fields = vec!["3".to_string(), "5".to_string()];
        assert_eq!(parse_fields(&fields, 2), Some(vec![3, 5]));
        assert_eq!(parse_fields(&fields, 1), None);
    }
}
