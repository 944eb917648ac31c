//! `rand_core` integration
//!
//! Lets [`Xorshift64`] drive any code written against the `rand_core`
//! traits. Every method maps onto whole xorshift draws, so the draw
//! accounting of the rest of the crate still holds when the generator is
//! used through these traits.

use rand_core::{RngCore, SeedableRng};

use crate::rng::prng::Xorshift64;

impl RngCore for Xorshift64 {
    /// Returns the upper half of the next 64-bit draw.
    ///
    /// The high bits of xorshift64 are of better quality than the low ones.
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    /// Fills `dest` with little-endian 64-bit draws.
    ///
    /// One draw is consumed per started 8-byte chunk; surplus bytes of the
    /// final draw are discarded.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.chunks_mut(8).for_each(|chunk| {
            let word = self.next().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        });
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift64 {
    type Seed = [u8; 8];

    /// Interprets the seed as a little-endian `u64`.
    ///
    /// An all-zero seed gets the same substitution as [`Xorshift64::seed`].
    fn from_seed(seed: Self::Seed) -> Self {
        Self::seed(u64::from_le_bytes(seed))
    }

    /// Seeds directly from `state`, without the default hashing step.
    ///
    /// `Xorshift64::seed_from_u64(s)` is therefore identical to
    /// `Xorshift64::seed(s)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::seed(state)
    }
}
