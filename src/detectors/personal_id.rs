//! German identity-document number detector.
//!
//! Personalausweis and Reisepass share the format: one uppercase series
//! letter followed by eight letters or digits. There is no public checksum
//! strong enough to gate on, hence the moderate confidence.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};

static PERSONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Z0-9]{8}\b").unwrap());

pub struct PersonalIdDetector;

impl Detector for PersonalIdDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::PersonalId
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        PERSONAL_ID_RE
            .find_iter(text)
            .map(|m| Finding::new(PiiType::PersonalId, m.start(), m.end(), m.as_str(), 0.75))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ausweis_number() {
        let findings = PersonalIdDetector.detect("Ausweis-Nr. C22990047 vorgelegt");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "C22990047");
        assert_eq!(findings[0].confidence, 0.75);
    }

    #[test]
    fn detects_mixed_alnum_series() {
        assert_eq!(PersonalIdDetector.detect("Pass L01X00T47").len(), 1);
    }

    #[test]
    fn word_boundaries_guard_longer_strings() {
        // Ten alphanumerics: no boundary after the ninth character.
        assert!(PersonalIdDetector.detect("C229900471").is_empty());
    }

    #[test]
    fn lowercase_is_not_a_document_number() {
        assert!(PersonalIdDetector.detect("c22990047").is_empty());
    }
}
