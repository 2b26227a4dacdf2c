//! Whole-address IPv4 validator built on the per-keystroke octet check.
//!
//! The address is replayed one character at a time, as if typed into a field
//! shaped `i[i[i]].j[j[j]].k[k[k]].l[l[l]]`: each digit must pass
//! [`octet_validate`] against the characters typed before it, an octet holds
//! at most three digits, and a separator is only accepted after a non-empty
//! octet and before the fourth.

use crate::foundation::ValidationError;
use crate::validators::octet::{DEFAULT_SEPARATOR, octet_validate};

const OCTETS: usize = 4;
const MAX_OCTET_DIGITS: usize = 3;

/// How far a replayed address got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Progress {
    /// Octets started so far (1-based once anything is typed).
    octets: usize,
    /// Digits in the current octet.
    digits: usize,
}

crate::validator! {
    /// Validates a complete dotted-quad IPv4 address.
    ///
    /// Leading zeros are accepted (`010.000.000.001`), matching what the
    /// per-keystroke check lets through.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitguard_validator::validators::ipv4;
    /// use digitguard_validator::foundation::Validate;
    ///
    /// assert!(ipv4().validate("192.168.0.1").is_ok());
    /// assert!(ipv4().validate("192.168.0.256").is_err());
    /// assert!(ipv4().validate("192.168.0").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Ipv4Address { separator: char } for str;
    rule(self, input) { self.scan(input).is_some_and(|p| p.octets == OCTETS && p.digits > 0) }
    error(self, input) {
        ValidationError::new("invalid_ipv4", "Not a valid IPv4 address")
            .with_param("separator", self.separator.to_string())
    }
    fn ipv4_with_separator(separator: char);
}

impl Ipv4Address {
    /// Returns `true` if every character of `input` would be accepted while
    /// typing, whether or not the address is complete yet.
    ///
    /// ```
    /// use digitguard_validator::validators::ipv4;
    ///
    /// assert!(ipv4().accepts_prefix("192.16"));
    /// assert!(ipv4().accepts_prefix(""));
    /// assert!(!ipv4().accepts_prefix("192.260"));
    /// assert!(!ipv4().accepts_prefix("192..1"));
    /// ```
    #[must_use]
    pub fn accepts_prefix(&self, input: &str) -> bool {
        self.scan(input).is_some()
    }

    /// Replays `input`; `None` at the first refused character.
    fn scan(&self, input: &str) -> Option<Progress> {
        let mut buffer: Vec<char> = Vec::with_capacity(input.len());
        let mut progress = Progress {
            octets: 0,
            digits: 0,
        };

        for c in input.chars() {
            if c == self.separator {
                if progress.digits == 0 || progress.octets == OCTETS {
                    return None;
                }
                progress.octets += 1;
                progress.digits = 0;
            } else {
                if progress.digits == MAX_OCTET_DIGITS
                    || !octet_validate(&buffer, buffer.len(), c, self.separator)
                {
                    return None;
                }
                if progress.octets == 0 {
                    progress.octets = 1;
                }
                progress.digits += 1;
            }
            buffer.push(c);
        }

        Some(progress)
    }
}

impl Default for Ipv4Address {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

/// Creates an IPv4 validator using `.` as the separator.
#[must_use]
pub const fn ipv4() -> Ipv4Address {
    Ipv4Address::new(DEFAULT_SEPARATOR)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_complete_addresses() {
        let v = ipv4();
        assert!(v.validate("0.0.0.0").is_ok());
        assert!(v.validate("255.255.255.255").is_ok());
        assert!(v.validate("10.0.0.1").is_ok());
        assert!(v.validate("010.000.000.001").is_ok());
    }

    #[test]
    fn test_out_of_range_octet() {
        let v = ipv4();
        assert!(v.validate("256.0.0.1").is_err());
        assert!(v.validate("1.2.3.300").is_err());
        assert!(v.validate("1.260.3.4").is_err());
    }

    #[test]
    fn test_shape_errors() {
        let v = ipv4();
        assert!(v.validate("").is_err());
        assert!(v.validate("1.2.3").is_err());
        assert!(v.validate("1.2.3.").is_err());
        assert!(v.validate(".1.2.3").is_err());
        assert!(v.validate("1.2.3.4.5").is_err());
        assert!(v.validate("1234.1.1.1").is_err());
        assert!(v.validate("1.2.3.a").is_err());
    }

    #[test]
    fn test_custom_separator() {
        let v = ipv4_with_separator('-');
        assert!(v.validate("192-168-0-1").is_ok());
        assert!(v.validate("192.168.0.1").is_err());

        let err = v.validate("1-2").unwrap_err();
        assert_eq!(err.code, "invalid_ipv4");
        assert_eq!(err.param("separator"), Some("-"));
    }

    #[test]
    fn test_prefix_stops_at_first_refused_keystroke() {
        let v = ipv4();
        assert!(v.accepts_prefix("25"));
        assert!(!v.accepts_prefix("256"));
        assert!(v.accepts_prefix("1.2.3.4"));
        assert!(!v.accepts_prefix("1.2.3.4."));
    }

    #[test]
    fn test_default_uses_dot() {
        assert_eq!(Ipv4Address::default(), ipv4());
    }
}
