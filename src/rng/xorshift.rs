//! xorshift64 core step
//!
//! This module contains the bare xorshift64 recurrence with the (13, 7, 17)
//! shift triple. It has a period of 2⁶⁴ − 1 over non-zero states and maps
//! zero to zero, which is why seeding never lets the state become zero.
//!
//! The recurrence is linear over GF(2): anyone observing a single output
//! can recover the state and predict every later output. It must not be
//! used where unpredictability matters.

/// Left shift applied first.
const SHIFT_A: u32 = 13;

/// Right shift applied second.
const SHIFT_B: u32 = 7;

/// Left shift applied last.
const SHIFT_C: u32 = 17;

/// Advances a xorshift64 state by one step and returns the new state.
///
/// Shifts discard overflowing bits; there is no checked or saturating
/// arithmetic involved.
#[inline(always)]
pub(crate) const fn xorshift64_step(mut x: u64) -> u64 {
    x ^= x << SHIFT_A;
    x ^= x >> SHIFT_B;
    x ^= x << SHIFT_C;
    x
}
