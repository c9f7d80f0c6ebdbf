//! Rentenversicherungsnummer (SV-Nummer) detector.
//!
//! Format: 2-digit carrier code, 6-digit birth date, birth-surname initial,
//! 3-digit serial incl. check digit. The check-digit algorithm needs the
//! full personal context to validate, so the detector trusts the format.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};

static SVN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2}[ ]?\d{6}[ ]?[A-Z][ ]?\d{3}\b").unwrap());

pub struct SocialSecurityDetector;

impl Detector for SocialSecurityDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::SocialSecurity
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        SVN_RE
            .find_iter(text)
            .map(|m| Finding::new(PiiType::SocialSecurity, m.start(), m.end(), m.as_str(), 0.9))
            .collect()
    }
}
