//! Steueridentifikationsnummer detector (§ 139b AO).
//!
//! Eleven digits, first digit non-zero, grouped 2-3-3-3 with optional
//! single spaces. Structurally invalid numbers (check digit of 10 in the
//! mod-11-10 walk) are silently dropped; a wrong check digit downgrades
//! confidence instead.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};
use crate::validators::tax_id_check_digit;

static TAX_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[1-9]\d(?:[ ]?\d{3}){3}\b").unwrap());

fn validate(raw: &str) -> Option<f64> {
    let digits: String = raw.split(' ').collect::<Vec<_>>().concat();
    let expected = tax_id_check_digit(&digits)?;
    let actual = digits.chars().nth(10)?.to_digit(10)?;
    Some(if actual == expected { 1.0 } else { 0.6 })
}

pub struct TaxIdDetector;

impl Detector for TaxIdDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::TaxId
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for m in TAX_ID_RE.find_iter(text) {
            let Some(confidence) = validate(m.as_str()) else {
                continue;
            };
            findings.push(Finding::new(
                PiiType::TaxId,
                m.start(),
                m.end(),
                m.as_str(),
                confidence,
            ));
        }
        findings
    }
}
