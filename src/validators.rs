//! Pure checksum and structure validators.
//!
//! Stateless functions shared by the detectors. None of these allocate
//! beyond a scratch string; all reject instead of panicking on malformed
//! input.

use std::collections::HashMap;
use std::sync::LazyLock;

/// ISO country code → expected IBAN length (spaces stripped).
/// Unknown country codes mean rejection, not a guess.
static IBAN_LENGTHS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    HashMap::from([
        ("AD", 24),
        ("AE", 23),
        ("AL", 28),
        ("AT", 20),
        ("AZ", 28),
        ("BA", 20),
        ("BE", 16),
        ("BG", 22),
        ("BH", 22),
        ("BR", 29),
        ("BY", 28),
        ("CH", 21),
        ("CR", 22),
        ("CY", 28),
        ("CZ", 24),
        ("DE", 22),
        ("DJ", 27),
        ("DK", 18),
        ("DO", 28),
        ("EE", 20),
        ("EG", 29),
        ("ES", 24),
        ("FI", 18),
        ("FO", 18),
        ("FR", 27),
        ("GB", 22),
        ("GE", 22),
        ("GI", 23),
        ("GL", 18),
        ("GR", 27),
        ("GT", 28),
        ("HR", 21),
        ("HU", 28),
        ("IE", 22),
        ("IL", 23),
        ("IQ", 23),
        ("IS", 26),
        ("IT", 27),
        ("JO", 30),
        ("KW", 30),
        ("KZ", 20),
        ("LB", 28),
        ("LC", 32),
        ("LI", 21),
        ("LT", 20),
        ("LU", 20),
        ("LV", 21),
        ("LY", 25),
        ("MC", 27),
        ("MD", 24),
        ("ME", 22),
        ("MK", 19),
        ("MN", 20),
        ("MR", 27),
        ("MT", 31),
        ("MU", 30),
        ("NI", 28),
        ("NL", 18),
        ("NO", 15),
        ("OM", 23),
        ("PK", 24),
        ("PL", 28),
        ("PS", 29),
        ("PT", 25),
        ("QA", 29),
        ("RO", 24),
        ("RS", 22),
        ("RU", 33),
        ("SA", 24),
        ("SC", 31),
        ("SD", 18),
        ("SE", 24),
        ("SI", 19),
        ("SK", 24),
        ("SM", 27),
        ("SO", 23),
        ("ST", 25),
        ("SV", 28),
        ("TL", 23),
        ("TN", 24),
        ("TR", 26),
        ("UA", 29),
        ("VA", 22),
        ("VG", 24),
        ("XK", 20),
        ("YE", 30),
    ])
});

/// Expected IBAN length for a two-letter country code, if known.
pub fn iban_expected_length(country: &str) -> Option<usize> {
    IBAN_LENGTHS.get(country).copied()
}

/// Standard Luhn mod-10 check over a digit string.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;

    for ch in digits.chars().rev() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        let value = if double {
            let d = digit * 2;
            if d > 9 {
                d - 9
            } else {
                d
            }
        } else {
            digit
        };
        sum += value;
        double = !double;
    }

    sum % 10 == 0
}

/// ISO 7064 MOD-97-10 remainder, folding digit by digit so arbitrarily long
/// IBANs never overflow. Letters expand to 10–35.
fn mod97(rearranged: &str) -> Option<u32> {
    let mut remainder = 0u32;
    for ch in rearranged.chars() {
        if let Some(d) = ch.to_digit(10) {
            remainder = (remainder * 10 + d) % 97;
        } else if ch.is_ascii_uppercase() {
            let val = ch as u32 - 'A' as u32 + 10;
            remainder = (remainder * 100 + val) % 97;
        } else {
            return None;
        }
    }
    Some(remainder)
}

/// Full IBAN validation: known country, exact length, mod-97 remainder 1.
///
/// Input must already have spaces stripped and be uppercase. Returns
/// `None` when the format is unacceptable (unknown country or wrong
/// length), `Some(checksum_ok)` otherwise.
pub fn iban_checksum(clean: &str) -> Option<bool> {
    if clean.len() < 4 || !clean.is_ascii() {
        return None;
    }
    let country = &clean[..2];
    let expected = iban_expected_length(country)?;
    if clean.len() != expected {
        return None;
    }
    // Move the country code + check digits to the end, then fold.
    let rearranged = format!("{}{}", &clean[4..], &clean[..4]);
    Some(mod97(&rearranged) == Some(1))
}

/// Expected check digit for a Steueridentifikationsnummer (§ 139b AO),
/// computed over the first ten digits with the ISO 7064 mod-11-10 walk.
///
/// Returns `None` when the number is structurally invalid: a leading zero,
/// a non-digit, or a derived check value of 10.
pub fn tax_id_check_digit(digits: &str) -> Option<u32> {
    if digits.len() != 11 || digits.starts_with('0') {
        return None;
    }
    let mut product = 10u32;
    for ch in digits[..10].chars() {
        let d = ch.to_digit(10)?;
        let mut total = (product + d) % 10;
        if total == 0 {
            total = 10;
        }
        product = (total * 2) % 11;
    }
    let check = 11 - product;
    match check {
        10 => None,
        11 => Some(0),
        c => Some(c),
    }
}

/// § 290 SGB V check for a Krankenversichertennummer: one uppercase letter
/// followed by nine digits, the last of which is the check digit.
///
/// The letter is spelled as its two-digit ordinal (A=01 … Z=26) and glued
/// in front of the eight payload digits; weights 1,2,1,2,… run over those
/// ten positions with decimal digit-sums per product.
pub fn kvnr_checksum_valid(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || !bytes[0].is_ascii_uppercase() {
        return false;
    }
    if !bytes[1..].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let letter_value = bytes[0] - b'A' + 1;
    let mut digits: Vec<u32> = vec![(letter_value / 10) as u32, (letter_value % 10) as u32];
    digits.extend(raw[1..9].chars().filter_map(|c| c.to_digit(10)));

    let mut total = 0u32;
    for (i, d) in digits.iter().enumerate() {
        let product = d * if i % 2 == 0 { 1 } else { 2 };
        total += product / 10 + product % 10;
    }

    let expected = total % 10;
    let actual = (bytes[9] - b'0') as u32;
    expected == actual
}
