//! IBAN detector.
//!
//! Candidates must name a country from the length table and carry exactly
//! that many characters once spaces are stripped; unknown countries are
//! rejected outright. A correct mod-97 checksum scores 1.0, a failed one
//! still surfaces at 0.6.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};
use crate::validators::iban_checksum;

static IBAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}\d{2}(?:[ ]?[A-Z0-9]){11,31}\b").unwrap());

pub struct IbanDetector;

impl Detector for IbanDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Iban
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for m in IBAN_RE.find_iter(text) {
            let clean: String = m.as_str().split(' ').collect::<Vec<_>>().concat();
            let Some(checksum_ok) = iban_checksum(&clean) else {
                continue;
            };
            let confidence = if checksum_ok { 1.0 } else { 0.6 };
            findings.push(Finding::new(
                PiiType::Iban,
                m.start(),
                m.end(),
                m.as_str(),
                confidence,
            ));
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_compact_iban() {
        let findings = IbanDetector.detect("IBAN DE89370400440532013000");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "DE89370400440532013000");
        assert_eq!(findings[0].confidence, 1.0);
    }

    #[test]
    fn detects_spaced_iban() {
        let findings = IbanDetector.detect("Bitte an DE89 3704 0044 0532 0130 00 senden");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "DE89 3704 0044 0532 0130 00");
        assert_eq!(findings[0].confidence, 1.0);
    }

    #[test]
    fn failed_checksum_still_surfaces_at_low_confidence() {
        let findings = IbanDetector.detect("DE89370400440532013001");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].confidence, 0.6);
    }

    #[test]
    fn rejects_unknown_country_code() {
        assert!(IbanDetector.detect("ZZ89370400440532013000").is_empty());
    }

    #[test]
    fn rejects_wrong_length_for_country() {
        // 21 characters; a German IBAN has 22.
        assert!(IbanDetector.detect("DE893704004405320130").is_empty());
    }

    #[test]
    fn detects_austrian_and_swiss_ibans() {
        // Published test IBANs for AT (20) and CH (21).
        let at = IbanDetector.detect("AT611904300234573201");
        assert_eq!(at.len(), 1);
        assert_eq!(at[0].confidence, 1.0);

        let ch = IbanDetector.detect("CH9300762011623852957");
        assert_eq!(ch.len(), 1);
        assert_eq!(ch[0].confidence, 1.0);
    }

    #[test]
    fn offsets_cover_the_match() {
        let text = "Konto: DE89 3704 0044 0532 0130 00.";
        let f = &IbanDetector.detect(text)[0];
        assert_eq!(&text[f.start..f.end], f.text);
    }
}
