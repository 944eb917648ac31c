//! Uniform and policy password generation.
//!
//! Both generators validate their preconditions before the first draw,
//! so an `Err` return guarantees the generator was not advanced.
//!
//! Generated bytes are never logged.

use crate::charset::{Category, build_charset};
use crate::error::{PasswordError, Result};
use crate::password::shuffle::shuffle;
use crate::rng::Xorshift64;

/// Minimum length accepted by [`generate_with_policy`].
///
/// One slot per mandatory category.
pub const MIN_POLICY_LENGTH: usize = Category::ALL.len();

/// Generates a password by uniform sampling from `charset`.
///
/// Positions are filled left to right, each with
/// `charset[rng.next_bounded(charset.len())]`. Exactly `length` draws are
/// consumed; `length == 0` yields an empty password.
///
/// # Errors
///
/// Returns [`PasswordError::InvalidCharset`] if `charset` is empty. The
/// check happens before any draw, for every `length`.
///
/// # Examples
///
/// ```
/// use seedpass::{Xorshift64, generate};
///
/// let mut rng = Xorshift64::seed(7);
/// assert_eq!(generate(&mut rng, 3, b"x").unwrap(), b"xxx");
/// ```
pub fn generate(rng: &mut Xorshift64, length: usize, charset: &[u8]) -> Result<Vec<u8>> {
    if charset.is_empty() {
        tracing::debug!(length, "rejected uniform generation from empty charset");
        return Err(PasswordError::InvalidCharset);
    }

    tracing::trace!(length, charset_len = charset.len(), "uniform generation");

    let mut password = Vec::with_capacity(length);
    append_uniform(rng, &mut password, charset, length);

    Ok(password)
}

/// Generates a password containing every character category.
///
/// The password is built in three steps:
///
/// 1. One character each from lowercase, uppercase, digits and symbols,
///    in that order (4 draws).
/// 2. `length - 4` characters sampled uniformly from the full charset
///    with ambiguous characters kept (`length - 4` draws).
/// 3. A Fisher–Yates shuffle of the whole sequence (`length - 1` draws).
///
/// `2 * length - 1` draws are consumed in total. The shuffle only permutes,
/// so the output always holds at least one character of each category.
///
/// # Errors
///
/// Returns [`PasswordError::InvalidLength`] if `length` is below
/// [`MIN_POLICY_LENGTH`]. The generator is left untouched.
pub fn generate_with_policy(rng: &mut Xorshift64, length: usize) -> Result<Vec<u8>> {
    if length < MIN_POLICY_LENGTH {
        tracing::debug!(
            length,
            minimum = MIN_POLICY_LENGTH,
            "rejected policy generation below minimum length"
        );
        return Err(PasswordError::InvalidLength {
            length,
            minimum: MIN_POLICY_LENGTH,
        });
    }

    tracing::trace!(length, "policy generation");

    let mut password = Vec::with_capacity(length);

    for category in Category::ALL {
        append_uniform(rng, &mut password, category.alphabet(), 1);
    }

    let full = build_charset(true, true, true, true, false);
    append_uniform(rng, &mut password, &full, length - MIN_POLICY_LENGTH);

    shuffle(rng, &mut password);

    Ok(password)
}

/// Appends `count` bytes drawn uniformly from a non-empty `charset`.
fn append_uniform(rng: &mut Xorshift64, out: &mut Vec<u8>, charset: &[u8], count: usize) {
    out.extend((0..count).map(|_| charset[rng.next_index(charset.len())]));
}
