//! Redaction of row values that database drivers echo back in error text.
//!
//! Postgres reports offending values as `Key (code)=(acme) already exists`,
//! and company descriptions or names may carry contact details. Error
//! messages are passed through [`redact`] before they reach the logs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Compiled patterns used by [`redact`].
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// `Key (col, ...)=(value, ...)` detail emitted by Postgres constraint errors
    pub fn key_detail() -> &'static Regex {
        static KEY_DETAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"Key \(([^)]*)\)=\([^)]*\)").unwrap()
        });
        &KEY_DETAIL_REGEX
    }

    /// Email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }
}

/// Mask values in constraint details (keeping column names) and emails
/// (keeping the first character and the domain).
pub fn redact(input: &str) -> String {
    let keys_redacted = PiiRegexRegistry::key_detail().replace_all(input, "Key ($1)=([REDACTED])");

    PiiRegexRegistry::email()
        .replace_all(&keys_redacted, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.find('@') {
                Some(0) | None => full_match.to_string(),
                Some(at_pos) => format!("{}***{}", &full_match[..1], &full_match[at_pos..]),
            }
        })
        .to_string()
}

/// Display wrapper applying [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_detail_redaction() {
        assert_eq!(
            redact("Key (code)=(acme) already exists."),
            "Key (code)=([REDACTED]) already exists."
        );
        assert_eq!(
            redact("Key (comp_code)=(nope) is not present in table \"companies\"."),
            "Key (comp_code)=([REDACTED]) is not present in table \"companies\"."
        );
    }

    #[test]
    fn test_email_redaction() {
        assert_eq!(redact("contact user@example.com"), "contact u***@example.com");
        assert_eq!(redact("@example.com"), "@example.com");
    }

    #[test]
    fn test_plain_text_untouched() {
        let msg = "UNIQUE constraint failed: companies.code";
        assert_eq!(redact(msg), msg);
    }

    #[test]
    fn test_redacted_wrapper() {
        let redacted = Redacted("Key (code)=(ibm) already exists");
        assert_eq!(format!("{redacted}"), "Key (code)=([REDACTED]) already exists");
        assert_eq!(format!("{redacted:?}"), "Key (code)=([REDACTED]) already exists");
    }
}
