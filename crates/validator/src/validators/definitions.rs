//! Single-character input classes.
//!
//! Each class decides whether one typed character is acceptable; accepted
//! characters are upper-cased. Hosts look the classes up by their mask symbol.

/// A single-character input class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Definition {
    /// `A`: a letter (ASCII, Cyrillic `А`..`я`, `Ё`, `ё`, Latin-1 `À`..`ÿ`, `µ`).
    Letter,
    /// `&`: a letter as above, or an ASCII digit.
    Alphanumeric,
    /// `#`: a hexadecimal digit.
    Hex,
    /// `V`: a VIN character, i.e. an ASCII letter or digit other than `I`, `O`, `Q`.
    Vin,
}

impl Definition {
    /// Every definition.
    pub const ALL: [Self; 4] = [Self::Letter, Self::Alphanumeric, Self::Hex, Self::Vin];

    /// The mask symbol this class is bound to.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Letter => 'A',
            Self::Alphanumeric => '&',
            Self::Hex => '#',
            Self::Vin => 'V',
        }
    }

    /// Looks a class up by its mask symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.symbol() == symbol)
    }

    /// Returns `true` if `c` belongs to this class.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Letter => is_letter(c),
            Self::Alphanumeric => c.is_ascii_digit() || is_letter(c),
            Self::Hex => c.is_ascii_hexdigit(),
            Self::Vin => c.is_ascii_alphanumeric() && !matches!(c, 'I' | 'O' | 'Q' | 'i' | 'o' | 'q'),
        }
    }

    /// Accepts and cases `c`, or `None` if the class refuses it.
    ///
    /// Characters whose upper-case form is more than one character (`ß`)
    /// are kept as typed.
    ///
    /// ```
    /// use digitguard_validator::validators::Definition;
    ///
    /// assert_eq!(Definition::Hex.apply('f'), Some('F'));
    /// assert_eq!(Definition::Letter.apply('ж'), Some('Ж'));
    /// assert_eq!(Definition::Vin.apply('o'), None);
    /// ```
    #[must_use]
    pub fn apply(self, c: char) -> Option<char> {
        if !self.accepts(c) {
            return None;
        }

        Some(single_upper(c))
    }
}

fn is_letter(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z'
        | '\u{0410}'..='\u{044F}' | '\u{0401}' | '\u{0451}'
        | '\u{00C0}'..='\u{00FF}' | '\u{00B5}')
}

fn single_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// ============================================================================
// TESTS
// ============================================================================
