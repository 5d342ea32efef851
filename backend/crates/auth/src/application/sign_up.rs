//! Sign Up Use Case
//!
//! Creates a new user account and returns a fresh bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};
use crate::token;

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub token: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        if input.name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(input.name, email, password_hash);

        // Single atomic insert; the store's unique email index is the
        // correctness mechanism, not a pre-check.
        self.user_repo.create(&user).await?;

        let token = token::issue(&user.user_id, &self.config)?;

        tracing::info!(
            user_id = %user.user_id,
            "User signed up"
        );

        Ok(SignUpOutput { token })
    }
}
