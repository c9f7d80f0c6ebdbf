//! Email address detector.

use regex::Regex;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b").unwrap()
});

pub struct EmailDetector;

impl Detector for EmailDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Email
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        EMAIL_RE
            .find_iter(text)
            .map(|m| Finding::new(PiiType::Email, m.start(), m.end(), m.as_str(), 1.0))
            .collect()
    }
}
