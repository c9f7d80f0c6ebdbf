//! PII detection and anonymisation engine for German-language text
//! (DACH region).
//!
//! Feed in free-form text; get back the same text with every personally
//! identifying span replaced by a stable typed placeholder, plus a
//! reversible placeholder → original mapping:
//!
//! ```
//! use tarnkappe::Scanner;
//!
//! let scanner = Scanner::new();
//! let result = scanner.scan("IBAN DE89370400440532013000");
//! assert!(result.anonymised_text.contains("[IBAN_1]"));
//! assert_eq!(result.restore(&result.anonymised_text), result.original_text);
//! ```
//!
//! ## Architecture
//!
//! - **Detectors** (`detectors::*`): one per PII type, each a pattern
//!   matcher plus a format validator (mod-97 for IBANs, Luhn for cards,
//!   mod-11-10 for the tax id, modified Luhn for the KVNR, context-keyword
//!   gating for driver licences).
//! - **Secret rules** (`rules`): a declarative TOML catalogue of 100+
//!   credential patterns with per-rule capture-group redaction and
//!   severity-derived confidence.
//! - **Scanner** (`scanner`): runs the detectors, resolves span overlaps by
//!   priority, deduplicates placeholders, rewrites right-to-left.
//!
//! Person names come from a pluggable NER collaborator ([`ner::NerTagger`]);
//! the builtin [`ner::LexiconTagger`] is deterministic and dependency-free.

mod catalog;

pub mod detectors;
pub mod error;
pub mod model;
pub mod ner;
pub mod rules;
pub mod scanner;
pub mod validators;
pub mod whitelist;

pub use error::ConfigError;
pub use model::{Finding, PiiType, ScanResult};
pub use ner::{Entity, LexiconTagger, NerTagger};
pub use rules::{SecretRule, SecretRuleSet, Severity};
pub use scanner::{ScanOptions, Scanner, ScannerBuilder};
pub use whitelist::Whitelist;
