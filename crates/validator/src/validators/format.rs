//! Fixed-shape string formats: MAC addresses, VINs and CSS length units.

use std::sync::LazyLock;

use crate::foundation::ValidationError;
use crate::validators::definitions::Definition;

static CSS_UNIT_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?[0-9]+\.?([0-9]+)?(px|em|rem|ex|%|in|cm|mm|pt|pc)$").unwrap()
});

const MAC_GROUPS: usize = 6;
const MAC_GROUP_LEN: usize = 2;

fn is_mac(input: &str) -> bool {
    let groups: Vec<&str> = input.split(':').collect();
    groups.len() == MAC_GROUPS
        && groups.iter().all(|group| {
            group.chars().count() == MAC_GROUP_LEN
                && group.chars().all(|c| Definition::Hex.accepts(c))
        })
}

const VIN_BODY: usize = 13;
const VIN_SERIAL: usize = 4;

fn is_vin(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.len() == VIN_BODY + VIN_SERIAL
        && chars[..VIN_BODY].iter().all(|&c| Definition::Vin.accepts(c))
        && chars[VIN_BODY..].iter().all(char::is_ascii_digit)
}

// ============================================================================
// MAC ADDRESS
// ============================================================================

crate::validator! {
    /// Validates a colon-separated MAC address: six pairs of hex digits.
    ///
    /// Either case is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitguard_validator::validators::mac_address;
    /// use digitguard_validator::foundation::Validate;
    ///
    /// assert!(mac_address().validate("00:1A:2b:3C:4d:5E").is_ok());
    /// assert!(mac_address().validate("00-1A-2B-3C-4D-5E").is_err());
    /// ```
    pub MacAddress for str;
    rule(input) { is_mac(input) }
    error(input) { ValidationError::new("invalid_mac", "Not a valid MAC address") }
    fn mac_address();
}

// ============================================================================
// VIN
// ============================================================================

crate::validator! {
    /// Validates the shape of a 17-character vehicle identification number:
    /// 13 VIN characters followed by a 4-digit serial.
    ///
    /// The check digit at position 9 is not verified.
    pub Vin for str;
    rule(input) { is_vin(input) }
    error(input) {
        ValidationError::new("invalid_vin", "Not a valid vehicle identification number")
    }
    fn vin();
}

// ============================================================================
// CSS UNIT
// ============================================================================

crate::validator! {
    /// Validates a CSS length such as `12px`, `-1.5em` or `100%`.
    pub CssUnit { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("css_unit") }
    new() {
        Self {
            pattern: CSS_UNIT_REGEX.clone(),
        }
    }
    fn css_unit();
}

// ============================================================================
// TESTS
// ============================================================================
