//! Weighted mod-11 check digits for Brazilian taxpayer numbers.
//!
//! CPF (individuals, 11 digits) and CNPJ (companies, 14 digits) share one
//! algorithm: the last two digits are derived one at a time from the digits
//! before them. For each check digit the current payload is multiplied by a
//! positional weight table, summed, reduced mod 11, and the digit is `0` when
//! the remainder is below 2, otherwise `11 - remainder`. The derived digit is
//! appended to the payload before deriving the next one.
//!
//! The schemes differ only in length and in the weight table:
//!
//! | Scheme | Digits | Weights for payload length `L`, index `i`       |
//! |--------|--------|-------------------------------------------------|
//! | CPF    | 11     | `L + 1 - i` (10..2, then 11..2)                 |
//! | CNPJ   | 14     | `L - 7 - i`, plus 8 when below 2 (5..2, 9..2)   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Digit buffer sized for the longest scheme, kept on the stack.
type Digits = SmallVec<[u8; 14]>;

// ============================================================================
// WEIGHT RULE
// ============================================================================

/// How positional weights are assigned to payload digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightRule {
    /// `L - 7 - i`, wrapping to `+ 8` once it drops below 2.
    ///
    /// A 12-digit payload gets `5 4 3 2 9 8 7 6 5 4 3 2`.
    Wrapping,
    /// `L + 1 - i`, a plain descending run ending at 2.
    ///
    /// A 9-digit payload gets `10 9 8 7 6 5 4 3 2`.
    Descending,
}

impl WeightRule {
    /// Weight of the digit at `index` in a payload of `payload_len` digits.
    ///
    /// `index` must be below `payload_len`; every weight is then at least 2.
    ///
    /// ```
    /// use digitguard_validator::validators::checksum::WeightRule;
    ///
    /// assert_eq!(WeightRule::Wrapping.weight(12, 3), 2);
    /// assert_eq!(WeightRule::Wrapping.weight(12, 4), 9);
    /// assert_eq!(WeightRule::Descending.weight(9, 0), 10);
    /// ```
    #[must_use]
    pub const fn weight(self, payload_len: usize, index: usize) -> u32 {
        match self {
            Self::Wrapping => {
                let w = payload_len as i64 - 7 - index as i64;
                if w < 2 { (w + 8) as u32 } else { w as u32 }
            }
            Self::Descending => (payload_len + 1 - index) as u32,
        }
    }
}

// ============================================================================
// SCHEME PARAMETERS
// ============================================================================

/// The constants that distinguish one checksum scheme from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemeParams {
    /// Total number of digits, check digits included.
    pub length: usize,
    /// Number of trailing check digits.
    pub check_digits: usize,
    /// Modulus the weighted sum is reduced by; also the base of `base - r`.
    pub modulus: u32,
    /// Positional weight assignment.
    pub weights: WeightRule,
}

impl SchemeParams {
    /// Derives the next check digit for `payload`.
    fn next_check_digit(&self, payload: &[u8]) -> u8 {
        let len = payload.len();
        let sum: u32 = payload
            .iter()
            .enumerate()
            .map(|(i, &digit)| u32::from(digit) * self.weights.weight(len, i))
            .sum();

        let remainder = sum % self.modulus;
        if remainder < 2 {
            0
        } else {
            (self.modulus - remainder) as u8
        }
    }

    /// Appends check digits to `payload` until it reaches `length`.
    fn extend(&self, payload: &mut Digits) {
        while payload.len() < self.length {
            let digit = self.next_check_digit(payload);
            payload.push(digit);
        }
    }
}

// ============================================================================
// SCHEME
// ============================================================================

/// A supported checksum scheme.
///
/// Serialized by its lowercase name (`"cpf"`, `"cnpj"`); deserialized
/// through [`FromStr`], so any casing is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumScheme {
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits.
    Cnpj,
    /// Cadastro de Pessoas Físicas, 11 digits.
    Cpf,
}

impl ChecksumScheme {
    /// Every supported scheme.
    pub const ALL: [Self; 2] = [Self::Cnpj, Self::Cpf];

    /// The scheme's constants.
    #[must_use]
    pub const fn params(self) -> SchemeParams {
        match self {
            Self::Cnpj => SchemeParams {
                length: 14,
                check_digits: 2,
                modulus: 11,
                weights: WeightRule::Wrapping,
            },
            Self::Cpf => SchemeParams {
                length: 11,
                check_digits: 2,
                modulus: 11,
                weights: WeightRule::Descending,
            },
        }
    }

    /// Lowercase scheme name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cnpj => "cnpj",
            Self::Cpf => "cpf",
        }
    }

    /// Returns `true` if `identifier` is a valid, unformatted identifier.
    ///
    /// Total over all strings: wrong length, non-digit characters, a single
    /// repeated digit and check digit mismatches all yield `false`.
    ///
    /// ```
    /// use digitguard_validator::validators::ChecksumScheme;
    ///
    /// assert!(ChecksumScheme::Cpf.verify("11144477735"));
    /// assert!(!ChecksumScheme::Cpf.verify("111.444.777-35"));
    /// assert!(!ChecksumScheme::Cpf.verify("11111111111"));
    /// ```
    #[must_use]
    pub fn verify(self, identifier: &str) -> bool {
        let params = self.params();

        let Some(digits) = parse_digits(identifier) else {
            tracing::trace!(scheme = self.name(), reason = "digit", "checksum rejected");
            return false;
        };

        if digits.len() != params.length {
            tracing::trace!(
                scheme = self.name(),
                reason = "length",
                len = digits.len(),
                "checksum rejected"
            );
            return false;
        }

        if is_degenerate(&digits) {
            tracing::trace!(scheme = self.name(), reason = "repeated_digits", "checksum rejected");
            return false;
        }

        let mut expected: Digits = digits[..params.length - params.check_digits]
            .iter()
            .copied()
            .collect();
        params.extend(&mut expected);

        if expected != digits {
            tracing::trace!(scheme = self.name(), reason = "checksum", "checksum rejected");
            return false;
        }

        true
    }

    /// Appends the derived check digits to `payload`.
    ///
    /// `payload` must be exactly `length - check_digits` ASCII digits;
    /// otherwise `None`. Repeated-digit payloads are completed like any other;
    /// [`ChecksumScheme::verify`] still rejects the result.
    ///
    /// ```
    /// use digitguard_validator::validators::ChecksumScheme;
    ///
    /// assert_eq!(ChecksumScheme::Cpf.complete("111444777").as_deref(), Some("11144477735"));
    /// assert_eq!(
    ///     ChecksumScheme::Cnpj.complete("112223330001").as_deref(),
    ///     Some("11222333000181")
    /// );
    /// assert_eq!(ChecksumScheme::Cpf.complete("1114447"), None);
    /// ```
    #[must_use]
    pub fn complete(self, payload: &str) -> Option<String> {
        let params = self.params();
        let mut digits = parse_digits(payload)?;
        if digits.len() != params.length - params.check_digits {
            return None;
        }

        params.extend(&mut digits);
        Some(digits.iter().map(|&d| char::from(b'0' + d)).collect())
    }
}

impl fmt::Display for ChecksumScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scheme name that is neither `cpf` nor `cnpj`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown checksum scheme '{0}' (expected 'cpf' or 'cnpj')")]
pub struct UnknownScheme(pub String);

impl FromStr for ChecksumScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownScheme(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ChecksumScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Maps every character to its decimal value; `None` on any non-ASCII-digit.
fn parse_digits(input: &str) -> Option<Digits> {
    input
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Fewer than two distinct digit values.
fn is_degenerate(digits: &[u8]) -> bool {
    digits.split_first().is_none_or(|(first, rest)| rest.iter().all(|d| d == first))
}

/// Returns `true` if `digits` is a valid identifier under `scheme`.
///
/// The on-completion entry point for hosts: call it once the field holds the
/// full unmasked value and clear or reject the field on `false`.
#[must_use]
pub fn checksum_validate(digits: &str, scheme: ChecksumScheme) -> bool {
    scheme.verify(digits)
}

// ============================================================================
// TESTS
// ============================================================================
