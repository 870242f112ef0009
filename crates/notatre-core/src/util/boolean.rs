//! Loose string-to-boolean coercion
//!
//! Flags such as `DISABLE_COPY` arrive as free-form strings. Only the
//! literals listed here are recognised; anything else is reported as
//! unrecognised rather than silently guessed.

/// Literals read as `true` (compared case-insensitively after trimming)
pub const TRUTHY: &[&str] = &["true", "t", "yes", "y", "on", "1"];

/// Literals read as `false` (compared case-insensitively after trimming)
pub const FALSY: &[&str] = &["false", "f", "no", "n", "off", "0"];

/// Parse a boolean-like string
///
/// Returns `None` when the value matches neither literal set.
///
/// # Example
///
/// ```
/// use notatre_core::util::parse_bool;
///
/// assert_eq!(parse_bool("Yes"), Some(true));
/// assert_eq!(parse_bool(" off "), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_literals() {
        for value in ["true", "TRUE", "True", "t", "yes", "YES", "y", "on", "On", "1", " true "] {
            assert_eq!(parse_bool(value), Some(true), "{:?}", value);
        }
    }

    #[test]
    fn test_falsy_literals() {
        for value in ["false", "FALSE", "f", "no", "N", "off", "0", "\tno\n"] {
            assert_eq!(parse_bool(value), Some(false), "{:?}", value);
        }
    }

    #[test]
    fn test_unrecognised() {
        for value in ["", " ", "2", "enabled", "truthy", "yess", "-1"] {
            assert_eq!(parse_bool(value), None, "{:?}", value);
        }
    }

    #[test]
    fn test_literal_sets_disjoint() {
        for t in TRUTHY {
            assert!(!FALSY.contains(t));
        }
    }
}
