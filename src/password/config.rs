//! Password generation parameters.

use serde::{Deserialize, Serialize};

use crate::charset::CharsetOptions;
use crate::error::{PasswordError, Result};
use crate::password::core::{MIN_POLICY_LENGTH, generate, generate_with_policy};
use crate::rng::Xorshift64;

/// A reusable description of the passwords to generate.
///
/// The struct is plain data so it can be embedded in an application's own
/// configuration. Missing fields fall back to [`Default`] when
/// deserialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Number of characters per password.
    pub length: usize,

    /// Charset used in uniform mode.
    ///
    /// Ignored when `require_each_category` is set: the policy always
    /// samples from the four fixed categories.
    pub charset: CharsetOptions,

    /// Use [`generate_with_policy`] instead of [`generate`].
    pub require_each_category: bool,
}

impl PasswordConfig {
    /// Checks that [`generate`](Self::generate) can succeed.
    ///
    /// # Errors
    ///
    /// - [`PasswordError::InvalidLength`] for a policy config shorter than
    ///   [`MIN_POLICY_LENGTH`].
    /// - [`PasswordError::InvalidCharset`] for a uniform config whose
    ///   options produce an empty charset.
    pub fn validate(&self) -> Result<()> {
        if self.require_each_category {
            if self.length < MIN_POLICY_LENGTH {
                return Err(PasswordError::InvalidLength {
                    length: self.length,
                    minimum: MIN_POLICY_LENGTH,
                });
            }
        } else if self.charset.build().is_empty() {
            return Err(PasswordError::InvalidCharset);
        }

        Ok(())
    }

    /// Generates one password according to this configuration.
    ///
    /// The draws consumed are those of the underlying mode.
    ///
    /// # Errors
    ///
    /// Any error reported by [`validate`](Self::validate).
    pub fn generate(&self, rng: &mut Xorshift64) -> Result<Vec<u8>> {
        self.validate()?;

        if self.require_each_category {
            generate_with_policy(rng, self.length)
        } else {
            generate(rng, self.length, &self.charset.build())
        }
    }
}

impl Default for PasswordConfig {
    /// 16 characters, every category required.
    fn default() -> Self {
        Self {
            length: 16,
            charset: CharsetOptions::default(),
            require_each_category: true,
        }
    }
}
