//! Seedable, deterministic password generation
//!
//! This crate turns a numeric seed into password strings that are fully
//! reproducible: the same seed and the same request always yield the same
//! bytes. It is meant for test fixtures, demos and any other setting where
//! repeatable pseudo-random text is more useful than unpredictable text.
//!
//! **None of the output is suitable for real secrets.** The underlying
//! generator is xorshift64, which can be reconstructed from a handful of
//! observed outputs.
//!
//! # Module overview
//!
//! - `rng`
//!   The xorshift64 engine ([`Xorshift64`]). It owns a single 64-bit word
//!   of state, is seeded explicitly and is always passed around by
//!   exclusive reference. It also implements the `rand_core` traits so it
//!   can drive code written against the `rand` ecosystem.
//!
//! - `charset`
//!   The fixed category alphabets (lowercase, uppercase, digits, symbols),
//!   the ambiguous-character filter and [`build_charset`], which assembles
//!   an ordered alphabet from category flags.
//!
//! - `password`
//!   The two generation modes:
//!   - [`generate`] samples every position uniformly from a caller
//!     supplied charset.
//!   - [`generate_with_policy`] guarantees at least one character from
//!     each category and shuffles the result.
//!
//!   [`PasswordConfig`] bundles a length and charset options into a
//!   serialisable parameter set.
//!
//! - `error`
//!   [`PasswordError`], the closed set of precondition failures.
//!
//! # Example
//!
//! ```
//! use seedpass::{Xorshift64, build_charset, generate, generate_with_policy};
//!
//! let mut rng = Xorshift64::seed(42);
//!
//! let charset = build_charset(true, true, true, false, true);
//! let plain = generate(&mut rng, 12, &charset).unwrap();
//! assert_eq!(plain.len(), 12);
//!
//! let strong = generate_with_policy(&mut rng, 16).unwrap();
//! assert_eq!(strong.len(), 16);
//! ```
//!
//! # Design goals
//!
//! - No global or shared generator state
//! - Bit-exact reproducibility across platforms and releases
//! - Precondition violations reported as values, never as aborts

pub mod charset;
pub mod error;
pub mod password;
pub mod rng;

pub use charset::{CharsetOptions, build_charset};
pub use error::{PasswordError, Result};
pub use password::{MIN_POLICY_LENGTH, PasswordConfig, generate, generate_with_policy};
pub use rng::Xorshift64;
