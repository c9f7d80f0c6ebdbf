//! Core data model: PII categories, findings, and scan results.
//!
//! Offsets are always **byte** offsets into the original input, half-open
//! (`text[start..end]` is the matched substring). Detectors that work on
//! character offsets (the NER collaborator) convert at the boundary.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Category of personally identifying information.
///
/// The serialized tag doubles as the placeholder stem: a `CreditCard`
/// finding becomes `[CREDIT_CARD_1]` in the anonymised text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiType {
    Name,
    Address,
    Phone,
    Email,
    Iban,
    CreditCard,
    /// Personalausweis / Reisepass document number.
    PersonalId,
    /// Krankenversichertennummer (§ 290 SGB V).
    Kvnr,
    /// Rentenversicherungsnummer / SV-Nummer.
    SocialSecurity,
    /// Steueridentifikationsnummer (§ 139b AO).
    TaxId,
    /// Umsatzsteuer-Identifikationsnummer.
    VatId,
    DriverLicense,
    LicensePlate,
    /// Secret value inside a URL query parameter.
    UrlSecret,
    /// Credential / API key matched by the secret-rule catalogue.
    Secret,
}

impl PiiType {
    /// All categories, in detector execution order. Higher-priority types run
    /// first so that equal-priority overlap ties resolve toward them in the
    /// stable resolver sort.
    pub const ALL: [PiiType; 15] = [
        PiiType::Secret,
        PiiType::UrlSecret,
        PiiType::Iban,
        PiiType::CreditCard,
        PiiType::SocialSecurity,
        PiiType::Kvnr,
        PiiType::DriverLicense,
        PiiType::PersonalId,
        PiiType::TaxId,
        PiiType::VatId,
        PiiType::Email,
        PiiType::Phone,
        PiiType::LicensePlate,
        PiiType::Name,
        PiiType::Address,
    ];

    /// Stable string tag used in placeholders and external APIs.
    pub fn tag(self) -> &'static str {
        match self {
            PiiType::Name => "NAME",
            PiiType::Address => "ADDRESS",
            PiiType::Phone => "PHONE",
            PiiType::Email => "EMAIL",
            PiiType::Iban => "IBAN",
            PiiType::CreditCard => "CREDIT_CARD",
            PiiType::PersonalId => "PERSONAL_ID",
            PiiType::Kvnr => "KVNR",
            PiiType::SocialSecurity => "SOCIAL_SECURITY",
            PiiType::TaxId => "TAX_ID",
            PiiType::VatId => "VAT_ID",
            PiiType::DriverLicense => "DRIVER_LICENSE",
            PiiType::LicensePlate => "LICENSE_PLATE",
            PiiType::UrlSecret => "URL_SECRET",
            PiiType::Secret => "SECRET",
        }
    }

    /// Overlap-resolution priority; higher wins when spans collide.
    pub fn priority(self) -> u8 {
        match self {
            PiiType::Secret | PiiType::UrlSecret => 6,
            PiiType::Iban
            | PiiType::CreditCard
            | PiiType::SocialSecurity
            | PiiType::Kvnr
            | PiiType::DriverLicense => 5,
            PiiType::PersonalId | PiiType::TaxId | PiiType::VatId | PiiType::Email => 4,
            PiiType::Phone | PiiType::LicensePlate => 3,
            PiiType::Address => 2,
            PiiType::Name => 1,
        }
    }
}

impl fmt::Display for PiiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PiiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        PiiType::ALL
            .into_iter()
            .find(|t| t.tag() == upper)
            .ok_or_else(|| format!("unknown PII type: {s}"))
    }
}

/// A located PII span.
///
/// Produced by detectors with an empty `placeholder`; the scanner fills the
/// placeholder in during the assignment phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub pii_type: PiiType,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// The matched substring, verbatim.
    pub text: String,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f64,
    /// `[TYPE_N]` token; empty until assigned.
    pub placeholder: String,
    /// Identifier of the matching catalogue rule (SECRET findings only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

impl Finding {
    /// Construct a detector-phase finding (no placeholder yet).
    pub fn new(
        pii_type: PiiType,
        start: usize,
        end: usize,
        text: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Finding {
            pii_type,
            start,
            end,
            text: text.into(),
            confidence,
            placeholder: String::new(),
            rule_id: None,
        }
    }

    /// Span length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of one `scan` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub original_text: String,
    pub anonymised_text: String,
    /// Final findings: disjoint, sorted ascending by `start`.
    pub findings: Vec<Finding>,
    /// Placeholder → original substring.
    pub mapping: HashMap<String, String>,
}

impl ScanResult {
    /// Replace every placeholder in `text` with its original value.
    ///
    /// Applying this to `anonymised_text` recovers `original_text`.
    pub fn restore(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (placeholder, original) in &self.mapping {
            result = result.replace(placeholder, original);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_through_from_str() {
        for t in PiiType::ALL {
            assert_eq!(t.tag().parse::<PiiType>().unwrap(), t);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("iban".parse::<PiiType>().unwrap(), PiiType::Iban);
        assert_eq!("credit_card".parse::<PiiType>().unwrap(), PiiType::CreditCard);
        assert!("BANKLEITZAHL".parse::<PiiType>().is_err());
    }

    #[test]
    fn serde_tag_matches_placeholder_stem() {
        let json = serde_json::to_string(&PiiType::UrlSecret).unwrap();
        assert_eq!(json, "\"URL_SECRET\"");
    }

    #[test]
    fn priorities_follow_the_resolution_table() {
        assert_eq!(PiiType::Secret.priority(), 6);
        assert_eq!(PiiType::Iban.priority(), 5);
        assert_eq!(PiiType::Email.priority(), 4);
        assert_eq!(PiiType::Phone.priority(), 3);
        assert_eq!(PiiType::Address.priority(), 2);
        assert_eq!(PiiType::Name.priority(), 1);
        assert!(PiiType::DriverLicense.priority() > PiiType::PersonalId.priority());
    }

    #[test]
    fn finding_len_is_span_width() {
        let f = Finding::new(PiiType::Email, 4, 22, "kontakt@example.de", 1.0);
        assert_eq!(f.len(), 18);
        assert!(!f.is_empty());
    }

    #[test]
    fn restore_replaces_all_occurrences() {
        let mut mapping = HashMap::new();
        mapping.insert("[NAME_1]".to_string(), "Hans Müller".to_string());
        let result = ScanResult {
            original_text: String::new(),
            anonymised_text: String::new(),
            findings: Vec::new(),
            mapping,
        };
        assert_eq!(
            result.restore("[NAME_1] schrieb an [NAME_1]."),
            "Hans Müller schrieb an Hans Müller."
        );
    }
}
