//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{Email, UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user as a single atomic insert.
    ///
    /// Email uniqueness is enforced by the store's unique index; a
    /// duplicate insert must surface as `AuthError::EmailTaken`. There
    /// is deliberately no check-then-insert step here.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Update user (name/email/password_hash/updated_at)
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Check whether another user already holds this email.
    ///
    /// Used by profile update to re-validate uniqueness before commit.
    async fn email_taken(&self, email: &Email, exclude: &UserId) -> AuthResult<bool>;
}
