//! Per-PII-type detectors.
//!
//! Every detector is a pure function of the input text behind the
//! [`Detector`] trait: compiled patterns and data tables live in
//! process-wide `LazyLock` statics, so constructing a detector is free and
//! `detect` never blocks on anything but CPU.
//!
//! Detectors emit raw findings with an empty placeholder; overlap
//! resolution and placeholder assignment happen in the scanner. No detector
//! produces overlapping findings within its own output.
//!
//! The `regex` crate has no look-around, so boundary conditions (not inside
//! a longer number, not preceded by a word character) are checked by hand on
//! the neighbouring character. Helpers for that live here.

pub mod address;
pub mod credit_card;
pub mod driver_license;
pub mod email;
pub mod iban;
pub mod kvnr;
pub mod license_plate;
pub mod name;
pub mod personal_id;
pub mod phone;
pub mod secret;
pub mod social_security;
pub mod tax_id;
pub mod url_secret;
pub mod vat_id;

pub use address::AddressDetector;
pub use credit_card::CreditCardDetector;
pub use driver_license::DriverLicenseDetector;
pub use email::EmailDetector;
pub use iban::IbanDetector;
pub use kvnr::KvnrDetector;
pub use license_plate::LicensePlateDetector;
pub use name::NameDetector;
pub use personal_id::PersonalIdDetector;
pub use phone::PhoneDetector;
pub use secret::SecretDetector;
pub use social_security::SocialSecurityDetector;
pub use tax_id::TaxIdDetector;
pub use url_secret::UrlSecretDetector;
pub use vat_id::VatIdDetector;

use crate::model::{Finding, PiiType};

/// One PII finder. `detect` must be pure over the input text.
pub trait Detector: Send + Sync {
    fn pii_type(&self) -> PiiType;
    fn detect(&self, text: &str) -> Vec<Finding>;
}

/// Character immediately before byte offset `idx`, if any.
pub(crate) fn char_before(text: &str, idx: usize) -> Option<char> {
    text[..idx].chars().next_back()
}

/// Character starting at byte offset `idx`, if any.
pub(crate) fn char_after(text: &str, idx: usize) -> Option<char> {
    text[idx..].chars().next()
}
