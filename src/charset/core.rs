//! Charset assembly.
//!
//! A charset is the ordered list of bytes a password may be sampled from.
//! It is rebuilt from flags on demand; nothing here allocates beyond the
//! returned vector.

use serde::{Deserialize, Serialize};

use crate::charset::tables::{Category, is_ambiguous};

/// Builds a charset from category flags.
///
/// Categories are appended in the fixed order lowercase, uppercase,
/// digits, symbols, whichever flags are set. When `avoid_ambiguous` is
/// set, every byte of [`AMBIGUOUS`](crate::charset::AMBIGUOUS) is removed
/// from the assembled sequence afterwards, preserving the order of the
/// remaining bytes.
///
/// The result may be empty. Emptiness is not an error here; it is
/// rejected by the generators that sample from it.
///
/// # Examples
///
/// ```
/// use seedpass::build_charset;
///
/// assert_eq!(build_charset(false, false, true, false, true), b"23456789");
/// assert!(build_charset(false, false, false, false, false).is_empty());
/// ```
pub fn build_charset(
    use_lower: bool,
    use_upper: bool,
    use_digits: bool,
    use_symbols: bool,
    avoid_ambiguous: bool,
) -> Vec<u8> {
    let flags = [use_lower, use_upper, use_digits, use_symbols];

    let mut charset: Vec<u8> = Category::ALL
        .into_iter()
        .zip(flags)
        .filter(|&(_, enabled)| enabled)
        .flat_map(|(category, _)| category.alphabet().iter().copied())
        .collect();

    if avoid_ambiguous {
        charset.retain(|&b| !is_ambiguous(b));
    }

    charset
}

/// Category flags for [`build_charset`], as a reusable parameter set.
///
/// Missing fields fall back to [`Default`] when deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsetOptions {
    /// Include `a`–`z`.
    pub lowercase: bool,
    /// Include `A`–`Z`.
    pub uppercase: bool,
    /// Include `0`–`9`.
    pub digits: bool,
    /// Include the symbol table.
    pub symbols: bool,
    /// Strip `0`, `O`, `I`, `l` and `1` after assembly.
    pub avoid_ambiguous: bool,
}

impl CharsetOptions {
    /// Builds the charset described by these options.
    pub fn build(&self) -> Vec<u8> {
        build_charset(
            self.lowercase,
            self.uppercase,
            self.digits,
            self.symbols,
            self.avoid_ambiguous,
        )
    }
}

impl Default for CharsetOptions {
    /// All four categories, ambiguous characters kept.
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            avoid_ambiguous: false,
        }
    }
}
