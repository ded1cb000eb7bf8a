//! CPF (Brazilian taxpayer number) handling.
//!
//! CPFs are opaque identifiers here: the only rule is that `.` and `-` are
//! stripped before anything is stored or compared.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Strip every `.` and `-` from a raw CPF, keeping all other characters in order.
pub fn normalize_cpf(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '.' | '-')).collect()
}

/// A normalized CPF.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Normalize `raw` without further checks. An all-punctuation input
    /// becomes the empty CPF.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_cpf(raw))
    }

    /// Normalize `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let cpf = Self::normalize(raw);
        if cpf.0.is_empty() {
            return Err(DomainError::validation("cpf cannot be empty"));
        }
        Ok(cpf)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dots_and_dashes() {
        assert_eq!(normalize_cpf("123.456.789-00"), "12345678900");
        assert_eq!(normalize_cpf("12345678900"), "12345678900");
    }

    #[test]
    fn parse_rejects_punctuation_only() {
        assert!(matches!(Cpf::parse("..-"), Err(DomainError::Validation(_))));
        assert!(matches!(Cpf::parse(""), Err(DomainError::Validation(_))));
    }

    #[test]
    fn parse_accepts_whitespace_cpf() {
        assert_eq!(Cpf::parse("   ").unwrap().as_str(), "   ");
    }

    #[test]
    fn normalize_allows_empty_result() {
        assert_eq!(Cpf::normalize("..-").as_str(), "");
    }

    #[test]
    fn parse_keeps_normalized_form() {
        let cpf = Cpf::parse("111.111.111-11").unwrap();
        assert_eq!(cpf.as_str(), "11111111111");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the output never contains `.` or `-`.
            #[test]
            fn output_has_no_punctuation(raw in "[0-9.\\-]{0,20}") {
                let out = normalize_cpf(&raw);
                prop_assert!(!out.contains('.'));
                prop_assert!(!out.contains('-'));
            }

            /// Property: digits survive in their original order.
            #[test]
            fn digit_order_is_preserved(raw in "[0-9.\\-]{0,20}") {
                let expected: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
                prop_assert_eq!(normalize_cpf(&raw), expected);
            }

            /// Property: normalizing twice is the same as normalizing once.
            #[test]
            fn normalization_is_idempotent(raw in "\\PC{0,24}") {
                let once = normalize_cpf(&raw);
                prop_assert_eq!(normalize_cpf(&once), once);
            }
        }
    }
}
