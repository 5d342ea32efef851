//! Password Hashing and Verification
//!
//! Argon2id password handling with:
//! - Salted, memory-hard hashing (PHC string output)
//! - Zeroization of clear text passwords on drop
//! - Constant-time verification
//!
//! Plaintext passwords are never logged and never leave this module
//! except as a hash.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length accepted from user input
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password contains only whitespace or nothing at all
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains control characters
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Ensures password data is erased from memory when the value is dropped.
/// Does not implement `Clone` to prevent accidental copies; Debug output
/// is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Rejects empty/whitespace-only input, over-long input, and control
    /// characters. Anything else is accepted as-is.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = raw.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        for ch in raw.chars() {
            if ch.is_control() && ch != ' ' && ch != '\t' {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(raw))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// Generates a fresh random salt per call, so hashing the same
    /// password twice yields different PHC strings.
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        // Random 128-bit salt
        let salt = SaltString::generate(OsRng);

        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// Stores the Argon2id hash in PHC format, which carries the algorithm
/// identifier, parameters, salt, and hash. Safe to persist.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // Validate it's a valid PHC string
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// A malformed stored hash verifies false rather than erroring.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let argon2 = Argon2::default();

        // Argon2 uses constant-time comparison internally
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
