//! DACH phone number detector.
//!
//! Covers international (`+`/`00` + 49/43/41, optional `(0)` trunk) and
//! national (leading `0`, not `00`) forms with space, dash, slash, and
//! parenthesis separators. Matches with fewer than nine digits are noise
//! (short order numbers, dates) and get dropped.

use regex::Regex;
use std::sync::LazyLock;

use super::{char_after, char_before, Detector};
use crate::model::{Finding, PiiType};

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?:
            (?:\+|00)(?:49|43|41)
            [\s()\-]*
            (?:\(0\)[\s()\-]*)?
            \d[\d\s()\-]{5,16}\d
        |
            0[1-9]
            [\d\s\-/]{5,13}\d
        )",
    )
    .unwrap()
});

const MIN_DIGITS: usize = 9;

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

pub struct PhoneDetector;

impl Detector for PhoneDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Phone
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for m in PHONE_RE.find_iter(text) {
            // Stand-in for the (?<![+\d]) / (?!\d) assertions: never start
            // inside a longer number or a second country prefix.
            if char_before(text, m.start()).is_some_and(|c| c == '+' || c.is_ascii_digit()) {
                continue;
            }
            if char_after(text, m.end()).is_some_and(|c| c.is_ascii_digit()) {
                continue;
            }

            let raw = m.as_str().trim_end();
            if digit_count(raw) < MIN_DIGITS {
                continue;
            }

            findings.push(Finding::new(
                PiiType::Phone,
                m.start(),
                m.start() + raw.len(),
                raw,
                1.0,
            ));
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_international_mobile() {
        let findings = PhoneDetector.detect("Ruf mich an: +49 171 1234567");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "+49 171 1234567");
        assert_eq!(findings[0].confidence, 1.0);
    }

    #[test]
    fn detects_austrian_and_swiss_prefixes() {
        assert_eq!(PhoneDetector.detect("+43 1 5321234").len(), 1);
        assert_eq!(PhoneDetector.detect("+41 44 668 18 00").len(), 1);
    }

    #[test]
    fn detects_double_zero_prefix_and_trunk_zero() {
        assert_eq!(PhoneDetector.detect("0049 30 12345678").len(), 1);
        assert_eq!(PhoneDetector.detect("+49 (0) 171 1234567").len(), 1);
    }

    #[test]
    fn detects_national_with_slash() {
        let findings = PhoneDetector.detect("Zentrale: 0221/123456 erreichbar");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "0221/123456");
    }

    #[test]
    fn rejects_fewer_than_nine_digits() {
        assert!(PhoneDetector.detect("Kurzwahl 0171 123").is_empty());
    }

    #[test]
    fn does_not_match_inside_longer_digit_runs() {
        // 22-digit account number; the national pattern must not bite into it.
        assert!(PhoneDetector.detect("Konto 0123456789012345678901 Ende").is_empty());
    }

    #[test]
    fn offsets_exclude_trailing_whitespace() {
        let text = "Tel: 030 12345678  (Büro)";
        let f = &PhoneDetector.detect(text)[0];
        assert_eq!(&text[f.start..f.end], f.text);
        assert!(!f.text.ends_with(' '));
    }
}
