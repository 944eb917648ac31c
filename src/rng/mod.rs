//! Random number generation module
//!
//! This module provides the deterministic, non-cryptographic randomness
//! that drives password generation.
//!
//! It is built around the xorshift64 recurrence and exposes a small
//! seedable generator that callers own and thread explicitly through
//! every operation that draws from it.

/// Design goals:
/// - Bit-exact reproducibility from a 64-bit seed
/// - No global or thread-local instance
/// - No heap allocation
/// - Minimal and explicit API surface
pub(crate) mod xorshift;
mod compat;
mod prng;

/// Seedable xorshift64 pseudorandom number generator.
///
/// This type is the only source of randomness used by the crate.
pub use prng::{DEFAULT_SEED, Xorshift64};
