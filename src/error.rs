//! Construction-time errors.
//!
//! Everything here is fatal and surfaces before the first scan: a scanner
//! that constructed successfully never fails at scan time.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading catalogues and compiling rule patterns.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed secret-rule catalogue: {0}")]
    Rules(#[from] toml::de::Error),

    #[error("rule '{rule_id}': invalid pattern: {source}")]
    Pattern {
        rule_id: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule '{rule_id}': unknown severity '{value}'")]
    UnknownSeverity { rule_id: String, value: String },

    #[error("rule '{rule_id}': secret_group {group} exceeds the pattern's {available} capture groups")]
    SecretGroup {
        rule_id: String,
        group: usize,
        available: usize,
    },

    #[error("duplicate rule id '{rule_id}' in catalogue")]
    DuplicateRuleId { rule_id: String },

    #[error("catalogue {} contains no entries", path.display())]
    EmptyCatalogue { path: PathBuf },
}
