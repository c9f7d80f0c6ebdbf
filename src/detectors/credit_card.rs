//! Credit card number detector.
//!
//! Formatted variants (4-4-4-4, AmEx 4-6-5, Diners 4-6-4) are reported even
//! when the Luhn check fails, at reduced confidence. Raw 13–19 digit runs
//! are only reported when Luhn passes; unvalidated digit runs are
//! overwhelmingly invoice and tracking numbers.

use regex::Regex;
use std::sync::LazyLock;

use super::{char_after, char_before, Detector};
use crate::model::{Finding, PiiType};
use crate::validators::luhn_valid;

static CC_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Verbose mode ignores unescaped whitespace even inside classes, hence
    // the escaped separator space.
    Regex::new(
        r"(?x)
        (?:
            \d{4}[\ \-]\d{4}[\ \-]\d{4}[\ \-]\d{4}   # 16-digit formatted
          | \d{4}[\ \-]\d{6}[\ \-]\d{5}              # 15-digit AmEx
          | \d{4}[\ \-]\d{6}[\ \-]\d{4}              # 14-digit Diners
          | \d{13,19}                                # raw digits
        )",
    )
    .unwrap()
});

pub struct CreditCardDetector;

impl Detector for CreditCardDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::CreditCard
    }

    fn detect(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for m in CC_RE.find_iter(text) {
            // Candidates must be bounded by non-digits on both sides.
            if char_before(text, m.start()).is_some_and(|c| c.is_ascii_digit()) {
                continue;
            }
            if char_after(text, m.end()).is_some_and(|c| c.is_ascii_digit()) {
                continue;
            }

            let raw = m.as_str();
            let is_formatted = raw.contains(' ') || raw.contains('-');
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            let luhn_ok = luhn_valid(&digits);

            let confidence = if is_formatted {
                if luhn_ok {
                    1.0
                } else {
                    0.6
                }
            } else {
                if !luhn_ok {
                    continue;
                }
                0.9
            };

            findings.push(Finding::new(
                PiiType::CreditCard,
                m.start(),
                m.end(),
                raw,
                confidence,
            ));
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_visa_with_valid_luhn() {
        let findings = CreditCardDetector.detect("Karte: 4111 1111 1111 1111");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].confidence, 1.0);
    }

    #[test]
    fn formatted_with_bad_luhn_is_kept_at_low_confidence() {
        let findings = CreditCardDetector.detect("Karte: 4111-1111-1111-1112");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].confidence, 0.6);
    }

    #[test]
    fn raw_digits_need_a_passing_luhn() {
        let valid = CreditCardDetector.detect("4111111111111111");
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].confidence, 0.9);

        assert!(CreditCardDetector.detect("1234567890123456").is_empty());
    }

    #[test]
    fn detects_amex_and_diners_grouping() {
        let amex = CreditCardDetector.detect("AmEx 3782 822463 10005 Ende");
        assert_eq!(amex.len(), 1);
        assert_eq!(amex[0].text, "3782 822463 10005");

        let diners = CreditCardDetector.detect("Diners 3056 930902 5904 Ende");
        assert_eq!(diners.len(), 1);
        assert_eq!(diners[0].text, "3056 930902 5904");
    }

    #[test]
    fn does_not_bite_into_longer_digit_runs() {
        // 22 digits: no 13-19 digit window may be reported.
        assert!(CreditCardDetector
            .detect("Referenz 0123456789012345678901")
            .is_empty());
    }

    #[test]
    fn offsets_cover_the_match() {
        let text = "Zahlung mit 4111 1111 1111 1111 storniert";
        let f = &CreditCardDetector.detect(text)[0];
        assert_eq!(&text[f.start..f.end], f.text);
    }
}
