//! Password generation.
//!
//! Two generation modes are provided, both driven by an explicitly passed
//! [`Xorshift64`](crate::Xorshift64):
//!
//! - [`generate`]
//!   Uniform sampling: every position is drawn independently from a
//!   caller-supplied charset.
//!
//! - [`generate_with_policy`]
//!   Policy sampling: one character is forced from each of the four
//!   categories, the rest is drawn from the full charset, and the result
//!   is shuffled so the forced characters land at arbitrary positions.
//!
//! [`PasswordConfig`] selects between the two from a serialisable
//! parameter set.
//!
//! ## Draw accounting
//!
//! Every mode consumes a fixed number of draws for a given length:
//!
//! | Call | Draws |
//! |---|---|
//! | `generate(rng, n, charset)` | `n` |
//! | `generate_with_policy(rng, n)` | `2n - 1` |
//!
//! Failed calls consume none.

mod config;
pub mod core;
pub(crate) mod shuffle;

pub use self::core::{MIN_POLICY_LENGTH, generate, generate_with_policy};
pub use config::PasswordConfig;
