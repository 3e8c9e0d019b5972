//! Coupon code value object and generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Alphabet for generated codes: uppercase letters and digits.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generated codes are always this long.
pub const CODE_LENGTH: usize = 8;

/// An 8-character uppercase alphanumeric coupon code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponCode(String);

impl CouponCode {
    /// Draws a fresh random code, uniform over `[A-Z0-9]^8`.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code: String = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Repairs a colliding code by keeping its first four characters and
    /// appending the last four digits of the Unix-millisecond clock.
    ///
    /// Last-resort disambiguation when random draws keep colliding; the
    /// result still goes through the ledger's unique constraint.
    pub fn with_timestamp_suffix(&self, now: &Timestamp) -> Self {
        let millis = now.unix_millis();
        let suffix = format!("{:04}", millis.rem_euclid(10_000));
        Self(format!("{}{}", &self.0[..4], suffix))
    }

    /// Normalizes scanned input: trims, uppercases, rejects empty strings.
    pub fn normalize(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim().to_uppercase();
        if cleaned.is_empty() {
            return Err(ValidationError::empty_field("code"));
        }
        Ok(Self(cleaned))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CouponCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_codes_have_the_right_shape() {
        for _ in 0..100 {
            let code = CouponCode::generate();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code
                .as_str()
                .bytes()
                .all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn sequential_generation_yields_distinct_codes() {
        let codes: HashSet<_> = (0..1000).map(|_| CouponCode::generate()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn timestamp_suffix_keeps_first_four_characters() {
        let code = CouponCode::normalize("ABCDEFGH").unwrap();
        let repaired = code.with_timestamp_suffix(&Timestamp::now());
        assert_eq!(&repaired.as_str()[..4], "ABCD");
        assert_eq!(repaired.as_str().len(), CODE_LENGTH);
        assert!(repaired.as_str()[4..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn normalize_uppercases_and_trims() {
        let code = CouponCode::normalize("  ab12cd34 ").unwrap();
        assert_eq!(code.as_str(), "AB12CD34");
    }

    #[test]
    fn normalize_rejects_empty_input() {
        assert!(CouponCode::normalize("   ").is_err());
        assert!(CouponCode::normalize("").is_err());
    }
}
