//! Seedable xorshift64 generator
//!
//! This module wraps the xorshift64 step in an owned generator type.
//!
//! The generator:
//! - holds exactly one 64-bit word of state
//! - substitutes a fixed non-zero constant for a zero seed
//! - is advanced only through `&mut self`, so a single owner controls the
//!   stream at all times
//!
//! It is intended for reproducible test data, never for secrets.

use crate::rng::xorshift::xorshift64_step;

/// State used when the caller seeds with zero.
///
/// Zero is the fixed point of xorshift and would yield an endless stream
/// of zeros. This is the 64-bit golden ratio constant.
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic xorshift64 pseudorandom number generator.
///
/// Two generators built from the same seed produce identical sequences.
/// The state is private; the only way to observe it is through draws.
///
/// The type is deliberately not `Copy`: an implicit copy would silently
/// fork the stream. Use [`Clone`] when a fork is actually wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Creates a generator from a seed.
    ///
    /// A seed of `0` is replaced with [`DEFAULT_SEED`]. Seeding never
    /// fails.
    pub fn seed(value: u64) -> Self {
        let state = if value == 0 {
            tracing::trace!(substitute = DEFAULT_SEED, "zero seed replaced");
            DEFAULT_SEED
        } else {
            value
        };

        Self { state }
    }

    /// Creates a generator from a seed.
    ///
    /// This is equivalent to calling [`Xorshift64::seed`].
    pub fn new(value: u64) -> Self {
        Self::seed(value)
    }

    /// Advances the generator and returns the new 64-bit value.
    ///
    /// The returned value is also the new internal state.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> u64 {
        self.state = xorshift64_step(self.state);
        self.state
    }

    /// Returns `next() % bound`.
    ///
    /// The plain modulo reduction slightly favours low values whenever
    /// `bound` does not divide 2⁶⁴. That bias is part of the output
    /// contract: replacing it with rejection sampling would change every
    /// generated password.
    ///
    /// `bound` must be non-zero. Every caller in this crate checks that
    /// before drawing.
    #[inline]
    pub fn next_bounded(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "next_bounded called with a zero bound");
        self.next() % bound
    }

    /// Draws an index in `0..len`.
    ///
    /// Consumes exactly one draw. `len` must be non-zero.
    #[inline]
    pub(crate) fn next_index(&mut self, len: usize) -> usize {
        self.next_bounded(len as u64) as usize
    }
}
