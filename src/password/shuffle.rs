//! In-place Fisher–Yates shuffle.

use crate::rng::Xorshift64;

/// Shuffles `bytes` in place.
///
/// For `j` from `len` down to `2`, an index `k = next() % j` is drawn and
/// `bytes[k]` is swapped with `bytes[j - 1]`. This consumes `len - 1`
/// draws for `len >= 2` and none for shorter slices.
///
/// The multiset of bytes is unchanged; only positions move.
pub(crate) fn shuffle(rng: &mut Xorshift64, bytes: &mut [u8]) {
    for j in (2..=bytes.len()).rev() {
        let k = rng.next_index(j);
        bytes.swap(k, j - 1);
    }
}
