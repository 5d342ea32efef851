//! User Entity
//!
//! A storefront account: profile fields plus the password hash. The
//! hash never leaves the domain layer except toward the database.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Email, UserId, UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Email (unique across all users, login identifier)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replace the password hash
    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
