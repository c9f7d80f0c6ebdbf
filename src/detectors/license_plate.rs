//! Kfz-Kennzeichen detector.
//!
//! District code (1-3 letters, umlauts included), recognition letters
//! (1-2), number (1-4 digits, no leading zero), optional E/H suffix for
//! electric and vintage vehicles. The official hyphenated form scores
//! higher than the space-separated one; when both patterns hit the same
//! span only the hyphen finding survives.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};

static HYPHEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-ZÄÖÜ]{1,3})-([A-Z]{1,2})[ ]?([1-9][0-9]{0,3}[EH]?)\b").unwrap()
});

static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-ZÄÖÜ]{1,3}) ([A-Z]{1,2}) ([1-9][0-9]{0,3}[EH]?)\b").unwrap()
});

/// Total length of district + recognition + digits (E/H suffix stripped)
/// must land in the legal 4-8 range.
fn plausible(district: &str, letters: &str, number: &str) -> bool {
    let digits = number.trim_end_matches(['E', 'H']);
    let total = district.chars().count() + letters.len() + digits.len();
    (4..=8).contains(&total)
}

pub struct LicensePlateDetector;

impl Detector for LicensePlateDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::LicensePlate
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        let mut findings: Vec<Finding> = Vec::new();

        for caps in HYPHEN_RE.captures_iter(text) {
            let m = caps.get(0).unwrap();
            if plausible(&caps[1], &caps[2], &caps[3]) {
                findings.push(Finding::new(
                    PiiType::LicensePlate,
                    m.start(),
                    m.end(),
                    m.as_str(),
                    0.75,
                ));
            }
        }

        for caps in SPACE_RE.captures_iter(text) {
            let m = caps.get(0).unwrap();
            if !plausible(&caps[1], &caps[2], &caps[3]) {
                continue;
            }
            let duplicate = findings
                .iter()
                .any(|f| f.start == m.start() && f.end == m.end());
            if !duplicate {
                findings.push(Finding::new(
                    PiiType::LicensePlate,
                    m.start(),
                    m.end(),
                    m.as_str(),
                    0.65,
                ));
            }
        }

        findings
    }
}
