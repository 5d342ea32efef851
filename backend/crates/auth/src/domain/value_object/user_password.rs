//! User Password Value Object
//!
//! Domain wrapper around `platform::password` for hashing and
//! verification. The raw password is zeroized on drop and never
//! serialized or logged; the hashed form is what gets stored.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
            }
            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            )),
            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores password in Argon2id PHC string format. Safe to persist.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Create from raw password by hashing
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash()
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Create from PHC string stored in the database
    pub fn from_db(phc: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc)
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }

    /// PHC string for storage
    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}
