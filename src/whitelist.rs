//! Public-figure whitelist.
//!
//! Names on the list are never anonymised. Membership is deliberately loose:
//! a candidate matches when it equals an entry or is a substring of one, so
//! a tagger that emits only "Merz" still hits "Friedrich Merz".

use crate::catalog;
use crate::error::ConfigError;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

const BUILTIN_FIGURES: &str = include_str!("data/public_figures.txt");

/// Case-insensitive set of names exempt from anonymisation.
#[derive(Debug, Clone)]
pub struct Whitelist {
    names: HashSet<String>,
}

impl Whitelist {
    /// The shipped public-figure catalogue, parsed once per process.
    pub fn builtin() -> Self {
        static BUILTIN: LazyLock<Whitelist> = LazyLock::new(|| Whitelist {
            names: catalog::parse_lines(BUILTIN_FIGURES)
                .into_iter()
                .map(|n| n.to_lowercase())
                .collect(),
        });
        BUILTIN.clone()
    }

    /// Load a replacement catalogue from disk.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let names: HashSet<String> = catalog::read_lines(path)?
            .into_iter()
            .map(|n| n.to_lowercase())
            .collect();
        if names.is_empty() {
            return Err(ConfigError::EmptyCatalogue {
                path: path.to_path_buf(),
            });
        }
        Ok(Whitelist { names })
    }

    /// An empty whitelist (nothing is exempt).
    pub fn empty() -> Self {
        Whitelist {
            names: HashSet::new(),
        }
    }

    /// True when `name` equals a known entry or is contained in one.
    pub fn is_listed(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if self.names.contains(&lower) {
            return true;
        }
        self.names.iter().any(|known| known.contains(&lower))
    }

    pub fn add(&mut self, name: &str) {
        self.names.insert(name.trim().to_lowercase());
    }

    pub fn remove(&mut self, name: &str) {
        self.names.remove(&name.trim().to_lowercase());
    }

    /// Copy of this whitelist with `extra` names merged in.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = self.names.clone();
        for name in extra {
            names.insert(name.as_ref().trim().to_lowercase());
        }
        Whitelist { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Whitelist::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_contains_public_figures() {
        let wl = Whitelist::builtin();
        assert!(wl.is_listed("Friedrich Merz"));
        assert!(wl.is_listed("friedrich merz"));
        assert!(wl.is_listed("Alexander Van der Bellen"));
    }

    #[test]
    fn substring_of_an_entry_counts() {
        let wl = Whitelist::builtin();
        // Bare surname: contained in "Friedrich Merz".
        assert!(wl.is_listed("Merz"));
        assert!(!wl.is_listed("Hans Müller"));
    }

    #[test]
    fn add_and_remove_round_trip() {
        let mut wl = Whitelist::empty();
        assert!(!wl.is_listed("Erika Musterfrau"));
        wl.add("Erika Musterfrau");
        assert!(wl.is_listed("erika musterfrau"));
        wl.remove("ERIKA MUSTERFRAU");
        assert!(!wl.is_listed("Erika Musterfrau"));
    }

    #[test]
    fn extended_does_not_mutate_the_base() {
        let base = Whitelist::empty();
        let ext = base.extended(["Max Mustermann"]);
        assert!(ext.is_listed("Max Mustermann"));
        assert!(!base.is_listed("Max Mustermann"));
    }

    #[test]
    fn from_path_loads_and_rejects_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# only names\nJane Doe").unwrap();
        let wl = Whitelist::from_path(file.path()).unwrap();
        assert!(wl.is_listed("jane doe"));

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(Whitelist::from_path(empty.path()).is_err());
    }
}
