//! Profile Use Cases
//!
//! Read and partially update the authenticated user's profile. The
//! identity always comes from the verified token, never from the body.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, RawPassword, UserId, UserPassword};
use crate::error::{AuthError, AuthResult};
use crate::token;

// ============================================================================
// Get Profile
// ============================================================================

/// Get profile use case
pub struct GetProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

// ============================================================================
// Update Profile
// ============================================================================

/// Partial profile update: each field independently optional.
///
/// Empty strings count as absent, matching the storefront client which
/// submits whatever the form holds.
#[derive(Debug, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update profile output
#[derive(Debug)]
pub struct UpdateProfileOutput {
    pub token: String,
    pub name: String,
    pub email: String,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        patch: ProfilePatch,
    ) -> AuthResult<UpdateProfileOutput> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(name) = present(patch.name) {
            user.set_name(name);
        }

        if let Some(email) = present(patch.email) {
            let email =
                Email::new(email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

            // Uniqueness re-checked against the store before commit
            if email != user.email && self.user_repo.email_taken(&email, user_id).await? {
                return Err(AuthError::EmailTaken);
            }
            user.set_email(email);
        }

        if let Some(password) = present(patch.password) {
            let raw = RawPassword::new(password)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            let hash =
                UserPassword::from_raw(&raw).map_err(|e| AuthError::Internal(e.to_string()))?;
            user.set_password(hash);
        }

        self.user_repo.update(&user).await?;

        let token = token::issue(&user.user_id, &self.config)?;

        tracing::info!(
            user_id = %user.user_id,
            "Profile updated"
        );

        Ok(UpdateProfileOutput {
            token,
            name: user.name,
            email: user.email.into_db(),
        })
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryUserRepository, seeded_user};

    async fn setup() -> (Arc<InMemoryUserRepository>, Arc<AuthConfig>, UserId) {
        let repo = Arc::new(InMemoryUserRepository::default());
        let config = Arc::new(AuthConfig::new("test-secret"));

        let user = seeded_user("Asha", "asha@x.com", "pw123");
        let user_id = user.user_id;
        repo.create(&user).await.unwrap();

        (repo, config, user_id)
    }

    #[tokio::test]
    async fn get_profile_returns_user() {
        let (repo, _, user_id) = setup().await;

        let use_case = GetProfileUseCase::new(repo);
        let user = use_case.execute(&user_id).await.unwrap();

        assert_eq!(user.name, "Asha");
        assert_eq!(user.email.as_str(), "asha@x.com");
    }

    #[tokio::test]
    async fn get_profile_unknown_user() {
        let (repo, _, _) = setup().await;

        let use_case = GetProfileUseCase::new(repo);
        let err = use_case.execute(&UserId::new()).await.unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn patch_applies_only_provided_fields() {
        let (repo, config, user_id) = setup().await;

        let use_case = UpdateProfileUseCase::new(repo.clone(), config);
        let output = use_case
            .execute(
                &user_id,
                ProfilePatch {
                    name: Some("Asha B".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(output.name, "Asha B");
        assert_eq!(output.email, "asha@x.com");

        let stored = repo.find_by_id(&user_id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Asha B");
        assert_eq!(stored.email.as_str(), "asha@x.com");
    }

    #[tokio::test]
    async fn empty_strings_count_as_absent() {
        let (repo, config, user_id) = setup().await;

        let use_case = UpdateProfileUseCase::new(repo.clone(), config);
        use_case
            .execute(
                &user_id,
                ProfilePatch {
                    name: Some("".to_string()),
                    email: Some("  ".to_string()),
                    password: None,
                },
            )
            .await
            .unwrap();

        let stored = repo.find_by_id(&user_id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Asha");
        assert_eq!(stored.email.as_str(), "asha@x.com");
    }

    #[tokio::test]
    async fn changed_email_rechecked_for_uniqueness() {
        let (repo, config, user_id) = setup().await;
        repo.create(&seeded_user("Bela", "bela@x.com", "pw456"))
            .await
            .unwrap();

        let use_case = UpdateProfileUseCase::new(repo.clone(), config);
        let err = use_case
            .execute(
                &user_id,
                ProfilePatch {
                    email: Some("bela@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));

        // Nothing committed
        let stored = repo.find_by_id(&user_id).await.unwrap().unwrap();
        assert_eq!(stored.email.as_str(), "asha@x.com");
    }

    #[tokio::test]
    async fn keeping_own_email_is_not_a_conflict() {
        let (repo, config, user_id) = setup().await;

        let use_case = UpdateProfileUseCase::new(repo, config);
        let output = use_case
            .execute(
                &user_id,
                ProfilePatch {
                    email: Some("asha@x.com".to_string()),
                    name: Some("Asha A".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(output.email, "asha@x.com");
    }

    #[tokio::test]
    async fn changed_password_verifies_afterwards() {
        let (repo, config, user_id) = setup().await;

        let use_case = UpdateProfileUseCase::new(repo.clone(), config);
        use_case
            .execute(
                &user_id,
                ProfilePatch {
                    password: Some("new-password".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = repo.find_by_id(&user_id).await.unwrap().unwrap();
        assert!(
            stored
                .password_hash
                .verify(&RawPassword::new("new-password".to_string()).unwrap())
        );
        assert!(
            !stored
                .password_hash
                .verify(&RawPassword::new("pw123".to_string()).unwrap())
        );
    }

    #[tokio::test]
    async fn update_issues_fresh_valid_token() {
        let (repo, config, user_id) = setup().await;

        let use_case = UpdateProfileUseCase::new(repo, config.clone());
        let output = use_case
            .execute(&user_id, ProfilePatch::default())
            .await
            .unwrap();

        assert_eq!(token::verify(&output.token, &config).unwrap(), user_id);
    }
}
