//! Textual shapes accepted for a CPF candidate.

use regex::Regex;
use std::sync::OnceLock;

/// Eleven contiguous digits, e.g. `11144477735`.
pub const NUMERIC_FORMAT: &str = r"^([0-9]{11})$";

/// Punctuated form, e.g. `111.444.777-35`.
pub const PUNCTUATED_FORMAT: &str = r"^([0-9]{3})\.([0-9]{3})\.([0-9]{3})-([0-9]{2})$";

/// Replacement applied to a punctuated match. Only the first three groups are
/// kept, so the trailing check digits are dropped.
pub const PUNCTUATED_REPLACE: &str = "${1}${2}${3}";

/// Compiled, read-only view of the format constants.
#[derive(Debug)]
pub struct CpfPatterns {
    numeric: Regex,
    punctuated: Regex,
}

impl CpfPatterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            numeric: Regex::new(NUMERIC_FORMAT)?,
            punctuated: Regex::new(PUNCTUATED_FORMAT)?,
        })
    }

    /// Shared instance, compiled on first use.
    pub fn get() -> &'static CpfPatterns {
        static PATTERNS: OnceLock<CpfPatterns> = OnceLock::new();
        PATTERNS.get_or_init(|| CpfPatterns::compile().expect("CPF patterns are valid regexes"))
    }

    pub fn is_numeric(&self, value: &str) -> bool {
        self.numeric.is_match(value)
    }

    pub fn is_punctuated(&self, value: &str) -> bool {
        self.punctuated.is_match(value)
    }

    pub fn strip_punctuation(&self, value: &str) -> String {
        self.punctuated
            .replace(value, PUNCTUATED_REPLACE)
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_format() {
        let patterns = CpfPatterns::get();
        assert!(patterns.is_numeric("11144477735"));
        assert!(!patterns.is_numeric("1114447773"));
        assert!(!patterns.is_numeric("111444777355"));
        assert!(!patterns.is_numeric("1114447773a"));
        assert!(!patterns.is_numeric(" 11144477735"));
    }

    #[test]
    fn test_punctuated_format() {
        let patterns = CpfPatterns::get();
        assert!(patterns.is_punctuated("111.444.777-35"));
        assert!(!patterns.is_punctuated("111.444.777.35"));
        assert!(!patterns.is_punctuated("111-444-777-35"));
        assert!(!patterns.is_punctuated("11144477735"));
    }

    #[test]
    fn test_strip_punctuation_keeps_three_groups() {
        assert_eq!(
            CpfPatterns::get().strip_punctuation("123.456.789-01"),
            "123456789"
        );
    }
}
