//! URL query-parameter secret detector.
//!
//! Finds `key=value` pairs whose key is a known sensitive parameter name
//! and whose value is a non-trivial token. Only the value is reported, so
//! the key stays readable in the anonymised text
//! (`?token=abc…` → `?token=[URL_SECRET_1]`).

use regex::Regex;
use std::sync::LazyLock;

use super::{char_before, Detector};
use crate::model::{Finding, PiiType};

static URL_SECRET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?:token|api[_\-]?key|apikey|api[_\-]?token|access[_\-]?token|auth[_\-]?token|auth|secret|password|passwd|pwd|client[_\-]?secret|private[_\-]?key)=([^&\s"'<>\[\]{}]{6,})"#,
    )
    .unwrap()
});

pub struct UrlSecretDetector;

impl Detector for UrlSecretDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::UrlSecret
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for caps in URL_SECRET_RE.captures_iter(text) {
            let whole = caps.get(0).unwrap();
            // Key names must not continue a word: "mytoken=…" is not a
            // token parameter.
            if char_before(text, whole.start()).is_some_and(|c| c.is_alphanumeric() || c == '_') {
                continue;
            }

            let value = caps.get(1).unwrap();
            findings.push(Finding::new(
                PiiType::UrlSecret,
                value.start(),
                value.end(),
                value.as_str(),
                0.85,
            ));
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_the_value() {
        let text = "https://api.example.com/?token=abc123def456";
        let findings = UrlSecretDetector.detect(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "abc123def456");
        assert_eq!(&text[findings[0].start..findings[0].end], "abc123def456");
    }

    #[test]
    fn detects_hyphen_and_underscore_key_spellings() {
        assert_eq!(UrlSecretDetector.detect("?api-key=sk12345678").len(), 1);
        assert_eq!(UrlSecretDetector.detect("?client_secret=oauthsecret99").len(), 1);
    }

    #[test]
    fn short_values_are_ignored()  {
        assert!(UrlSecretDetector.detect("?token=abc12").is_empty());
    }

    #[test]
    fn embedded_key_names_do_not_match() {
        assert!(UrlSecretDetector.detect("?mytoken=abc123def456").is_empty());
    }

    #[test]
    fn value_stops_at_separator() {
        let findings = UrlSecretDetector.detect("?password=geheim123&user=max");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "geheim123");
    }
}
