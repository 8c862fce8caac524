//! CPF: the Brazilian individual taxpayer number.
//!
//! Eleven digits, the last two being mod-11 check digits. Stored as the raw
//! digits and rendered as `XXX.XXX.XXX-XX`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Remove every non-digit character.
#[must_use]
pub fn strip(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Check length, repeated digits, and both check digits.
///
/// Punctuation is ignored, so `111.444.777-35` and `11144477735` are
/// equally valid.
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    let digits: Vec<u32> = strip(raw).chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// `Σ digit[i] × (weight − i)`, then `(sum × 10) mod 11`, with 10 folded to 0.
fn check_digit(digits: &[u32], weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((0..weight).rev().map(|w| w + 1))
        .map(|(digit, w)| digit * w)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder == 10 { 0 } else { remainder }
}

/// A validated CPF holding exactly eleven digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Strip punctuation and validate.
    ///
    /// Returns `None` when the number fails any check.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        is_valid(raw).then(|| Self(strip(raw)))
    }

    /// The raw eleven digits, as persisted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0;
        if d.len() == CPF_LENGTH && d.is_ascii() {
            write!(f, "{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
        } else {
            f.write_str(d)
        }
    }
}
