//! Führerscheinnummer detector.
//!
//! Authority code (1-3 letters), 6-digit birth date, 2 serial characters.
//! There is no standardised checksum, so the pattern is gated on a licence
//! keyword within ±200 bytes of the match; bare matches elsewhere are
//! reference numbers, not licences.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};

static LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,3}[0-9]{6}[A-Z0-9]{2}\b").unwrap());

static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)f[uü]hrerschein|fahrerlaubnis|fs[-\s]?nr|driver\s+licen[sc]e|driving\s+licen[sc]e")
        .unwrap()
});

const CONTEXT_WINDOW: usize = 200;

/// Largest char-boundary offset `<= idx`.
fn floor_boundary(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Smallest char-boundary offset `>= idx`, capped at the text length.
fn ceil_boundary(text: &str, mut idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

pub struct DriverLicenseDetector;

impl Detector for DriverLicenseDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::DriverLicense
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for m in LICENSE_RE.find_iter(text) {
            let window_start = floor_boundary(text, m.start().saturating_sub(CONTEXT_WINDOW));
            let window_end = ceil_boundary(text, m.end() + CONTEXT_WINDOW);
            let window = &text[window_start..window_end];

            if CONTEXT_RE.is_match(window) {
                findings.push(Finding::new(
                    PiiType::DriverLicense,
                    m.start(),
                    m.end(),
                    m.as_str(),
                    0.75,
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_nearby_enables_the_match() {
        let findings = DriverLicenseDetector.detect("Führerschein: B951204XY");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "B951204XY");
        assert_eq!(findings[0].confidence, 0.75);
    }

    #[test]
    fn same_number_without_keyword_is_dropped() {
        assert!(DriverLicenseDetector.detect("Referenz: B951204XY").is_empty());
    }

    #[test]
    fn english_keyword_variants_count() {
        assert_eq!(
            DriverLicenseDetector.detect("driver licence no. MUC850630A1").len(),
            1
        );
        assert_eq!(
            DriverLicenseDetector.detect("FS-Nr: AB123456C9 hinterlegt").len(),
            1
        );
    }

    #[test]
    fn keyword_beyond_the_window_does_not_count() {
        let padding = "x".repeat(260);
        let text = format!("Führerschein {padding} B951204XY");
        assert!(DriverLicenseDetector.detect(&text).is_empty());
    }

    #[test]
    fn umlauts_near_the_window_edge_do_not_panic() {
        // The 200-byte window opens in the middle of a two-byte "ä"; the
        // detector must snap to a char boundary instead of panicking.
        let text = format!("x{}Führerschein: {}B951204XY", "ä".repeat(30), "ä".repeat(80));
        assert_eq!(DriverLicenseDetector.detect(&text).len(), 1);
    }
}
