//! Person name detector.
//!
//! Entity spans come from the NER collaborator; this detector only keeps
//! `PER` entities, converts their character offsets to byte offsets, pulls
//! directly preceding titles (`Dr.`, `Frau`, `Dipl.-Ing.`, …) into the
//! span, and drops whitelisted public figures.

use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;

use super::Detector;
use crate::model::{Finding, PiiType};
use crate::ner::{char_span_to_bytes, NerTagger, PERSON_LABEL};
use crate::whitelist::Whitelist;

/// One or more titles directly before the entity, matched right-anchored
/// against the prefix so the span grows to the earliest title.
static TITLE_BEFORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:(?:Herr|Frau|Dr\.?|Prof\.?|Mag\.?|DI|Ing\.?|Dipl\.?-?Ing\.?|ao\.?\s*Univ\.?-?Prof\.?|Univ\.?-?Prof\.?|Priv\.?-?Doz\.?|MSc|MBA|BSc|LL\.M)\.?\s+)+\z",
    )
    .unwrap()
});

pub struct NameDetector {
    tagger: Arc<dyn NerTagger>,
    whitelist: Arc<Whitelist>,
}

impl NameDetector {
    pub fn new(tagger: Arc<dyn NerTagger>, whitelist: Arc<Whitelist>) -> Self {
        NameDetector { tagger, whitelist }
    }

    /// Detect with a per-call whitelist standing in for the configured one.
    pub(crate) fn detect_against(&self, text: &str, whitelist: &Whitelist) -> Vec<Finding> {
        let mut findings = Vec::new();

        for entity in self.tagger.entities(text) {
            if entity.label != PERSON_LABEL {
                continue;
            }
            let Some((ent_start, end)) = char_span_to_bytes(text, entity.start_char, entity.end_char)
            else {
                continue;
            };

            let (start, has_title) = expand_title(text, ent_start);
            let span = &text[start..end];

            if whitelist.is_listed(span) {
                continue;
            }

            let confidence = if has_title { 0.95 } else { 0.85 };
            findings.push(Finding::new(PiiType::Name, start, end, span, confidence));
        }

        findings
    }
}

/// Walk backwards over any title run ending at `start`.
fn expand_title(text: &str, start: usize) -> (usize, bool) {
    match TITLE_BEFORE_RE.find(&text[..start]) {
        Some(m) => (m.start(), true),
        None => (start, false),
    }
}

impl Detector for NameDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Name
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        self.detect_against(text, &self.whitelist)
    }
}
