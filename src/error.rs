//! Error types for password generation.
//!
//! Both variants describe caller mistakes rather than transient
//! conditions. They are raised before any sampling starts, so a failed
//! call leaves the generator exactly as it was.

use thiserror::Error;

/// Precondition failures reported by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Sampling was requested from an empty charset.
    #[error("charset is empty; at least one character is required")]
    InvalidCharset,

    /// A policy password was requested below the minimum length.
    ///
    /// The policy needs one slot per mandatory category.
    #[error("password length {length} is below the policy minimum of {minimum}")]
    InvalidLength { length: usize, minimum: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PasswordError>;
