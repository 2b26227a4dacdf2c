//! Per-keystroke IPv4 octet check.
//!
//! While an address is typed, each digit is checked before it is committed:
//! the digit plus up to two already-accepted digits before it (stopping at
//! the separator) are right-aligned into a 3-character window, zero-padded on
//! the left, and the window must read as `000`..`255`. Typing `2`, `5`, `6`
//! is refused at the `6` because the window becomes `256`.

use std::fmt;
use std::sync::LazyLock;

static OCTET_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^(?:25[0-5]|2[0-4][0-9]|[01][0-9][0-9])$").unwrap());

/// Conventional octet separator.
pub const DEFAULT_SEPARATOR: char = '.';

// ============================================================================
// WINDOW
// ============================================================================

/// The right-aligned, zero-padded octet being typed.
///
/// ```
/// use digitguard_validator::validators::OctetWindow;
///
/// let buffer: Vec<char> = "10.2".chars().collect();
/// let window = OctetWindow::build(&buffer, 4, '5', '.');
/// assert_eq!(window.to_string(), "025");
/// assert!(window.in_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OctetWindow([char; 3]);

impl OctetWindow {
    /// Builds the window for inserting `incoming` at `position`.
    ///
    /// Characters before `position` are the accepted buffer contents. A
    /// position past the end of `buffer` behaves like the start of an octet.
    #[must_use]
    pub fn build(buffer: &[char], position: usize, incoming: char, separator: char) -> Self {
        let before = |back: usize| {
            position
                .checked_sub(back)
                .and_then(|i| buffer.get(i))
                .copied()
                .filter(|&c| c != separator)
        };

        match before(1) {
            Some(prev) => match before(2) {
                Some(prev2) => Self([prev2, prev, incoming]),
                None => Self(['0', prev, incoming]),
            },
            None => Self(['0', '0', incoming]),
        }
    }

    /// The three window characters.
    #[must_use]
    pub const fn chars(&self) -> [char; 3] {
        self.0
    }

    /// Returns `true` if the window reads as an integer in `0..=255`.
    #[must_use]
    pub fn in_range(&self) -> bool {
        OCTET_REGEX.is_match(&self.to_string())
    }
}

impl fmt::Display for OctetWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Returns `true` if `incoming` may be inserted at `position` of `buffer`.
///
/// The per-character entry point for hosts: call it before committing each
/// keystroke of an IPv4 field and refuse the insertion on `false`.
///
/// ```
/// use digitguard_validator::validators::octet_validate;
///
/// assert!(octet_validate(&['2', '5'], 2, '5', '.'));
/// assert!(!octet_validate(&['2', '5'], 2, '6', '.'));
/// ```
#[must_use]
pub fn octet_validate(buffer: &[char], position: usize, incoming: char, separator: char) -> bool {
    let window = OctetWindow::build(buffer, position, incoming, separator);
    let accepted = window.in_range();
    if !accepted {
        tracing::trace!(%window, position, "octet rejected");
    }
    accepted
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_window_at_buffer_start() {
        assert_eq!(OctetWindow::build(&[], 0, '7', '.').to_string(), "007");
    }

    #[test]
    fn test_window_after_separator() {
        let buffer = chars("192.");
        assert_eq!(OctetWindow::build(&buffer, 4, '3', '.').to_string(), "003");
        assert_eq!(OctetWindow::build(&chars("."), 1, '3', '.').to_string(), "003");
    }

    #[test]
    fn test_window_one_digit_into_octet() {
        assert_eq!(OctetWindow::build(&chars("1"), 1, '9', '.').to_string(), "019");
        assert_eq!(OctetWindow::build(&chars("10.2"), 4, '5', '.').to_string(), "025");
    }

    #[test]
    fn test_window_two_digits_into_octet() {
        assert_eq!(OctetWindow::build(&chars("25"), 2, '6', '.').to_string(), "256");
        assert_eq!(OctetWindow::build(&chars("1.19"), 4, '2', '.').to_string(), "192");
    }

    #[test]
    fn test_window_position_past_buffer() {
        assert_eq!(OctetWindow::build(&chars("1"), 5, '4', '.').to_string(), "004");
    }

    #[test]
    fn test_window_uses_given_separator() {
        let buffer = chars("10-2");
        assert_eq!(OctetWindow::build(&buffer, 4, '5', '-').to_string(), "025");
        assert_eq!(OctetWindow::build(&buffer, 4, '5', '.').to_string(), "-25");
    }

    #[test]
    fn test_octet_validate_boundaries() {
        assert!(!octet_validate(&chars("25"), 2, '6', '.'));
        assert!(octet_validate(&chars("25"), 2, '5', '.'));
        assert!(octet_validate(&chars("24"), 2, '9', '.'));
        assert!(octet_validate(&chars("19"), 2, '9', '.'));
        assert!(!octet_validate(&chars("26"), 2, '0', '.'));
        assert!(!octet_validate(&chars("30"), 2, '0', '.'));
        assert!(octet_validate(&chars("1"), 1, '9', '.'));
        assert!(octet_validate(&chars("."), 1, '3', '.'));
    }

    #[test]
    fn test_octet_validate_rejects_non_digits() {
        assert!(!octet_validate(&[], 0, 'a', '.'));
        assert!(!octet_validate(&chars("1"), 1, ' ', '.'));
        assert!(!octet_validate(&[], 0, '.', '.'));
    }
}
