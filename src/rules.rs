//! Declarative secret-rule catalogue.
//!
//! Rules live in `src/data/secret_rules.toml` (or a caller-supplied file),
//! are compiled once at startup, and are immutable afterwards. Each rule
//! carries per-rule capture-group semantics: `secret_group = 0` redacts the
//! whole match, `N > 0` redacts only that capture group so surrounding
//! context (key names, URL structure) stays readable.
//!
//! An aho-corasick prescreen keeps the catalogue cheap on ordinary text:
//! rules that declare `keywords` only run when one of their literals occurs
//! in the input (ASCII case-insensitive). Rules without keywords always run.

use aho_corasick::AhoCorasick;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::ConfigError;

const BUILTIN_CATALOGUE: &str = include_str!("data/secret_rules.toml");

/// Rule severity; maps deterministically to finding confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Warning,
}

impl Severity {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "CRITICAL" => Some(Severity::Critical),
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            "WARNING" => Some(Severity::Warning),
            _ => None,
        }
    }

    /// Confidence assigned to findings produced by a rule of this severity.
    pub fn confidence(self) -> f64 {
        match self {
            Severity::Critical => 1.0,
            Severity::High => 0.9,
            Severity::Medium => 0.75,
            Severity::Low => 0.6,
            Severity::Warning => 0.5,
        }
    }
}

/// A compiled catalogue rule.
#[derive(Debug)]
pub struct SecretRule {
    pub id: String,
    pub description: String,
    pub pattern: Regex,
    /// 0 = redact the whole match; N = redact capture group N only.
    pub secret_group: usize,
    pub severity: Severity,
    pub tags: Vec<String>,
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogueSpec {
    rules: Vec<RuleSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleSpec {
    id: String,
    description: String,
    pattern: String,
    #[serde(default)]
    multiline: bool,
    secret_group: usize,
    severity: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// The compiled, immutable rule catalogue plus its keyword prescreen.
#[derive(Debug)]
pub struct SecretRuleSet {
    rules: Vec<SecretRule>,
    /// Matcher over every declared keyword; pattern index → owning rule.
    prescreen: Option<AhoCorasick>,
    keyword_owner: Vec<usize>,
}

impl SecretRuleSet {
    /// The catalogue shipped with the crate, shared process-wide.
    pub fn builtin() -> Arc<SecretRuleSet> {
        static BUILTIN: LazyLock<Arc<SecretRuleSet>> = LazyLock::new(|| {
            Arc::new(
                SecretRuleSet::parse(BUILTIN_CATALOGUE)
                    .expect("builtin secret_rules.toml is validated by the test-suite"),
            )
        });
        Arc::clone(&BUILTIN)
    }

    /// Load and compile a caller-supplied catalogue; fails fast on any
    /// malformed entry.
    pub fn from_path(path: &Path) -> Result<SecretRuleSet, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = SecretRuleSet::parse(&content)?;
        if set.rules.is_empty() {
            return Err(ConfigError::EmptyCatalogue {
                path: path.to_path_buf(),
            });
        }
        Ok(set)
    }

    pub(crate) fn parse(content: &str) -> Result<SecretRuleSet, ConfigError> {
        let spec: CatalogueSpec = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(spec.rules.len());
        for raw in spec.rules {
            if !seen.insert(raw.id.clone()) {
                return Err(ConfigError::DuplicateRuleId { rule_id: raw.id });
            }

            let severity = Severity::parse(&raw.severity).ok_or_else(|| {
                ConfigError::UnknownSeverity {
                    rule_id: raw.id.clone(),
                    value: raw.severity.clone(),
                }
            })?;

            let pattern = RegexBuilder::new(&raw.pattern)
                .multi_line(raw.multiline)
                .build()
                .map_err(|source| ConfigError::Pattern {
                    rule_id: raw.id.clone(),
                    source,
                })?;

            // secret_group is validated statically against the compiled
            // pattern; a group a particular match fails to capture is a
            // per-match skip, not a config error.
            if raw.secret_group >= pattern.captures_len() {
                return Err(ConfigError::SecretGroup {
                    rule_id: raw.id,
                    group: raw.secret_group,
                    available: pattern.captures_len() - 1,
                });
            }

            rules.push(SecretRule {
                id: raw.id,
                description: raw.description,
                pattern,
                secret_group: raw.secret_group,
                severity,
                tags: raw.tags,
                keywords: raw.keywords.iter().map(|k| k.to_lowercase()).collect(),
            });
        }

        let mut keyword_owner = Vec::new();
        let mut keywords = Vec::new();
        for (idx, rule) in rules.iter().enumerate() {
            for kw in &rule.keywords {
                keywords.push(kw.clone());
                keyword_owner.push(idx);
            }
        }
        let prescreen = if keywords.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&keywords)
                    .expect("catalogue keywords are plain literals"),
            )
        };

        Ok(SecretRuleSet {
            rules,
            prescreen,
            keyword_owner,
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[SecretRule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&SecretRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Rules worth running against `text`: every keyword-less rule plus any
    /// rule whose keyword literal occurs in the input.
    pub(crate) fn candidates<'r>(&'r self, text: &str) -> Vec<&'r SecretRule> {
        let mut active: Vec<bool> = self.rules.iter().map(|r| r.keywords.is_empty()).collect();
        if let Some(matcher) = &self.prescreen {
            for hit in matcher.find_overlapping_iter(text) {
                active[self.keyword_owner[hit.pattern().as_usize()]] = true;
            }
        }
        self.rules
            .iter()
            .zip(active)
            .filter_map(|(rule, on)| on.then_some(rule))
            .collect()
    }
}
