//! DACH postal address detector.
//!
//! The pattern is assembled at first use from two data catalogues: street
//! suffixes (`straße`, `gasse`, `platz`, …) and prepositional openers
//! (`Am`, `An der`, …), both sorted longest-first so the alternation
//! prefers the longer entry. Two shapes are recognised:
//!
//! - optional preposition + capitalised name + suffix (`Hauptstraße`,
//!   `Mariahilfer Straße`, `Achim-Stocker-Straße`)
//! - required preposition + bare capitalised noun (`Beim Brunnen`)
//!
//! followed by house number, optional comma, postal code (5 digits DE,
//! 4 digits AT/CH) and city. A cheap postal-code prefilter skips the
//! expensive pattern entirely on texts that cannot contain an address.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use super::Detector;
use crate::catalog;
use crate::model::{Finding, PiiType};

const SUFFIXES: &str = include_str!("../data/street_suffixes.txt");
const PREPOSITIONS: &str = include_str!("../data/street_prepositions.txt");

static PLZ_PREFILTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4,5}\b").unwrap());

fn suffix_alternation() -> String {
    let mut suffixes = catalog::parse_lines(SUFFIXES);
    suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    suffixes
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|")
}

fn preposition_alternation() -> String {
    let mut preps = catalog::parse_lines(PREPOSITIONS);
    preps.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
    let alts = preps
        .iter()
        .map(|p| {
            p.split_whitespace()
                .map(|word| regex::escape(word))
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?:{alts})\s+")
}

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    let suffix = suffix_alternation();
    let prep = preposition_alternation();
    let name = r"[A-ZÄÖÜ][a-zäöüß]+(?:[-][A-ZÄÖÜ]?[a-zäöüß]+)*";
    let house = r"\d+\s*[a-zA-Z]?(?:\s*/\s*\d+)?";
    let plz = r"(?:\d{5}|\d{4})";
    let city = r"[A-ZÄÖÜ][a-zäöüß]+(?:(?:\s+|-)[A-ZÄÖÜ]?[a-zäöüß]+)*";

    let pattern = format!(
        r"(?:(?:{prep})?(?P<street>{name})[-\s]*(?P<suffix>{suffix})\.?|(?:{prep})(?P<street2>{name}))\s+(?P<house>{house}),?\s+(?P<plz>{plz})\s+(?P<city>{city})"
    );

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("address pattern assembles from validated catalogues")
});

pub struct AddressDetector;

impl Detector for AddressDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Address
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        if !PLZ_PREFILTER.is_match(text) {
            return Vec::new();
        }

        ADDRESS_RE
            .find_iter(text)
            .map(|m| Finding::new(PiiType::Address, m.start(), m.end(), m.as_str(), 0.9))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_compound_street_with_de_plz() {
        let findings = AddressDetector.detect("Hauptstraße 12, 10115 Berlin");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "Hauptstraße 12, 10115 Berlin");
        assert_eq!(findings[0].confidence, 0.9);
    }

    #[test]
    fn detects_separated_suffix_and_at_plz() {
        let findings = AddressDetector.detect("Mariahilfer Straße 10, 1060 Wien");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "Mariahilfer Straße 10, 1060 Wien");
    }

    #[test]
    fn detects_hyphenated_street_name() {
        let findings = AddressDetector.detect("Achim-Stocker-Straße 1, 79108 Freiburg");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn detects_prepositional_street_without_suffix() {
        let findings = AddressDetector.detect("Beim Brunnen 4, 88299 Leutkirch");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].text.starts_with("Beim Brunnen"));
    }

    #[test]
    fn detects_house_number_with_letter_and_slash() {
        assert_eq!(
            AddressDetector.detect("Gartenweg 3a, 50667 Köln").len(),
            1
        );
        assert_eq!(
            AddressDetector
                .detect("Landstraße 12/2, 4020 Linz")
                .len(),
            1
        );
    }

    #[test]
    fn prefilter_short_circuits_without_postal_code() {
        assert!(AddressDetector.detect("Hauptstraße 12 ohne Postleitzahl").is_empty());
    }

    #[test]
    fn street_without_city_is_not_an_address() {
        assert!(AddressDetector.detect("Nur die Hauptstraße 12, 10115").is_empty());
    }

    #[test]
    fn offsets_cover_the_match() {
        let text = "Adresse: Hauptstraße 12, 10115 Berlin, Deutschland";
        let f = &AddressDetector.detect(text)[0];
        assert_eq!(&text[f.start..f.end], f.text);
    }
}
