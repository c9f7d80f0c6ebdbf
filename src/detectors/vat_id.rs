//! Umsatzsteuer-Identifikationsnummer detector.
//!
//! DE + nine digits, optionally spaced in groups of three.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};

static VAT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bDE[ ]?[0-9]{3}[ ]?[0-9]{3}[ ]?[0-9]{3}\b").unwrap());

fn valid(raw: &str) -> bool {
    let compact: String = raw.split(' ').collect::<Vec<_>>().concat();
    compact.len() == 11
        && compact.starts_with("DE")
        && compact[2..].chars().all(|c| c.is_ascii_digit())
}

pub struct VatIdDetector;

impl Detector for VatIdDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::VatId
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        VAT_ID_RE
            .find_iter(text)
            .filter(|m| valid(m.as_str()))
            .map(|m| Finding::new(PiiType::VatId, m.start(), m.end(), m.as_str(), 0.85))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_compact_vat_id() {
        let findings = VatIdDetector.detect("USt-IdNr. DE123456789");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "DE123456789");
        assert_eq!(findings[0].confidence, 0.85);
    }

    #[test]
    fn detects_spaced_groups() {
        let findings = VatIdDetector.detect("DE 123 456 789");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "DE 123 456 789");
    }

    #[test]
    fn ten_digits_do_not_match() {
        assert!(VatIdDetector.detect("DE1234567890").is_empty());
    }
}
