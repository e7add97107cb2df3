//! # CPF
//!
//! Brazilian individual taxpayer number: nine base digits followed by two
//! check digits derived from weighted sums modulo 11.
//!
//! Two contracts live here side by side:
//!
//! - Construction ([`Cpf::new`], [`Cpf::with_check_digits`], `str::parse`)
//!   fails hard with a [`CpfError`].
//! - The free functions [`cpf_from_string`] and [`validate`] are queries that
//!   only ever answer `None` or `false`.

use crate::domain::patterns::CpfPatterns;
use crate::utils::error::{CpfError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of base digits.
pub const BASE_LEN: usize = 9;

/// Number of digits in a complete CPF.
pub const CPF_LEN: usize = 11;

/// Largest value that fits in nine digits.
pub const MAX_BASE: u32 = 999_999_999;

/// A CPF built from its nine base digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf {
    base: String,
}

impl Cpf {
    /// Create a CPF from nine base digits.
    ///
    /// # Errors
    ///
    /// Returns [`CpfError::InvalidArgument`] when `base` is not exactly nine
    /// ASCII digits.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if base.len() != BASE_LEN || !base.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CpfError::invalid_argument(
                "base",
                format!("expected {} decimal digits, got {:?}", BASE_LEN, base),
            ));
        }
        Ok(Self { base })
    }

    /// Create a CPF from a number, zero-padded to nine digits.
    pub fn from_number(base: u32) -> Result<Self> {
        if base > MAX_BASE {
            return Err(CpfError::invalid_argument(
                "base",
                format!("{} does not fit in {} digits", base, BASE_LEN),
            ));
        }
        Ok(Self {
            base: format!("{:09}", base),
        })
    }

    /// Create a CPF from its base and the check digits the caller claims for it.
    ///
    /// # Errors
    ///
    /// Returns [`CpfError::InvalidCpf`] naming `base + digits` when the pair
    /// does not match the computed check digits.
    pub fn with_check_digits(base: impl Into<String>, digits: &str) -> Result<Self> {
        let cpf = Self::new(base)?;
        let candidate = format!("{}{}", cpf.base, digits);
        if !validate(&candidate) {
            return Err(CpfError::InvalidCpf(candidate));
        }
        Ok(cpf)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn check_digits(&self) -> (u8, u8) {
        let digits: Vec<u8> = self.base.bytes().map(|b| b - b'0').collect();
        weighted_check_digits(&digits)
    }

    /// Punctuated form: `XXX.XXX.XXX-YY`.
    pub fn formatted(&self) -> String {
        let (v1, v2) = self.check_digits();
        format!(
            "{}.{}.{}-{}{}",
            &self.base[..3],
            &self.base[3..6],
            &self.base[6..],
            v1,
            v2
        )
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (v1, v2) = self.check_digits();
        write!(f, "{}{}{}", self.base, v1, v2)
    }
}

impl FromStr for Cpf {
    type Err = CpfError;

    /// Parse a complete candidate, rejecting it unless the check digits match.
    fn from_str(s: &str) -> Result<Self> {
        if !validate(s) {
            return Err(CpfError::InvalidCpf(s.to_string()));
        }
        Self::new(&s[..BASE_LEN])
    }
}

/// Compute both check digits from the first nine entries of `cpf`.
///
/// # Errors
///
/// Returns [`CpfError::InvalidArgument`] naming `cpf` when fewer than nine
/// digits are given.
pub fn check_digits(cpf: &[u8]) -> Result<(u8, u8)> {
    if cpf.len() < BASE_LEN {
        return Err(CpfError::invalid_argument(
            "cpf",
            format!("size must be greater than {}", BASE_LEN - 1),
        ));
    }
    Ok(weighted_check_digits(&cpf[..BASE_LEN]))
}

// Caller guarantees `base.len() >= BASE_LEN`.
fn weighted_check_digits(base: &[u8]) -> (u8, u8) {
    let reversed = || base[..BASE_LEN].iter().rev().map(|&d| u32::from(d));

    let sum1: u32 = reversed()
        .enumerate()
        .map(|(i, d)| d * (9 - (i as u32 % 10)))
        .sum();
    let v1 = (sum1 % 11) % 10;

    let sum2: u32 = reversed()
        .enumerate()
        .map(|(i, d)| d * (9 - ((i as u32 + 1) % 10)))
        .sum();
    let v2 = ((sum2 + v1 * 9) % 11) % 10;

    (v1 as u8, v2 as u8)
}

/// Split a numeric string into its digits. `None` if any character is not
/// an ASCII digit.
pub fn string_to_digits(value: &str) -> Option<Vec<u8>> {
    value
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Normalize a candidate to digits only.
///
/// Eleven plain digits come back unchanged. The punctuated form
/// `XXX.XXX.XXX-YY` is reduced to its first three groups, so only the nine
/// base digits survive. Anything else is `None`.
pub fn cpf_from_string(value: &str) -> Option<String> {
    let patterns = CpfPatterns::get();
    if patterns.is_numeric(value) {
        Some(value.to_string())
    } else if patterns.is_punctuated(value) {
        Some(patterns.strip_punctuation(value))
    } else {
        None
    }
}

/// Whether `value` is a CPF whose check digits match its base.
pub fn validate(value: &str) -> bool {
    let Some(normalized) = cpf_from_string(value) else {
        return false;
    };
    let Some(digits) = string_to_digits(&normalized) else {
        return false;
    };
    if digits.len() < CPF_LEN {
        return false;
    }

    let (v1, v2) = weighted_check_digits(&digits);
    v1 == digits[9] && v2 == digits[10]
}
