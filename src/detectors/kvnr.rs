//! Krankenversichertennummer detector (§ 290 SGB V).
//!
//! One insurer letter plus nine digits. The trailing digit is a modified
//! Luhn check over the letter's two-digit ordinal and the payload; numbers
//! that fail it are still reported, just with less conviction.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};
use crate::validators::kvnr_checksum_valid;

static KVNR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z][0-9]{9}\b").unwrap());

pub struct KvnrDetector;

impl Detector for KvnrDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Kvnr
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        KVNR_RE
            .find_iter(text)
            .map(|m| {
                let confidence = if kvnr_checksum_valid(m.as_str()) {
                    0.95
                } else {
                    0.6
                };
                Finding::new(PiiType::Kvnr, m.start(), m.end(), m.as_str(), confidence)
            })
            .collect()
    }
}
