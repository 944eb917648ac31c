//! Fixed alphabets.
//!
//! The four category tables are pairwise disjoint. [`AMBIGUOUS`] is not a
//! category; it is only used to filter a charset after it is assembled.

/// Lowercase ASCII letters.
pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters.
pub const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII decimal digits.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Printable ASCII punctuation.
pub const SYMBOLS: &[u8; 29] = b"!@#$%^&*()-_=+[]{}|;:,.<>?/~`";

/// Characters easily confused with one another in common fonts.
pub const AMBIGUOUS: &[u8; 5] = b"0OIl1";

/// One of the four character categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl Category {
    /// All categories, in charset order.
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Digits,
        Category::Symbols,
    ];

    /// Returns the alphabet of this category.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Category::Lowercase => LOWERCASE,
            Category::Uppercase => UPPERCASE,
            Category::Digits => DIGITS,
            Category::Symbols => SYMBOLS,
        }
    }

    /// Returns `true` if `byte` belongs to this category.
    pub fn contains(self, byte: u8) -> bool {
        self.alphabet().contains(&byte)
    }

    /// Returns the category `byte` belongs to, if any.
    pub fn of(byte: u8) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.contains(byte))
    }
}

/// Returns `true` if `byte` is one of the [`AMBIGUOUS`] characters.
#[inline]
pub fn is_ambiguous(byte: u8) -> bool {
    AMBIGUOUS.contains(&byte)
}
