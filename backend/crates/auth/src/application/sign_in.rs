//! Sign In Use Case
//!
//! Authenticates a user by email + password and issues a fresh token.
//! An unknown email and a wrong password produce the same error, so a
//! caller cannot probe which emails are registered.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword};
use crate::error::{AuthError, AuthResult};
use crate::token;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = token::issue(&user.user_id, &self.config)?;

        tracing::info!(
            user_id = %user.user_id,
            "User signed in"
        );

        Ok(SignInOutput { token })
    }
}
