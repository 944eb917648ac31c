//! Character set construction.
//!
//! The module is split into two layers:
//!
//! - [`tables`]
//!   The fixed category alphabets and the ambiguous-character set, as
//!   compile-time byte tables, plus the [`Category`] enumeration over them.
//!
//! - [`core`]
//!   [`build_charset`] and the serialisable [`CharsetOptions`] wrapper
//!   around its flags.
//!
//! ## Ordering
//!
//! A built charset is always ordered lowercase, uppercase, digits, symbols,
//! each category in table order. The order has no effect on uniformity but
//! it is a stable contract: sampling indexes into the charset, so any
//! reordering would change generated passwords.

pub mod core;
pub mod tables;

pub use self::core::{CharsetOptions, build_charset};
pub use tables::{AMBIGUOUS, Category, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
