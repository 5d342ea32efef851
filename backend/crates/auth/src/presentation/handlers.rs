//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use std::sync::Arc;

use kernel::identity::AuthenticatedUser;

use crate::application::config::AuthConfig;
use crate::application::{
    GetProfileUseCase, ProfilePatch, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
    UpdateProfileUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, LoginRequest, ProfileResponse, ProfileSummary, SignUpRequest,
    UpdateProfileRequest, UpdateProfileResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: a derive would require `R: Clone`, but only the Arcs are
// cloned per request.
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        message: "User created".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Profile (behind the auth gate)
// ============================================================================

/// GET /users/profile
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(authed): Extension<AuthenticatedUser>,
) -> AuthResult<Json<ProfileResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());
    let user = use_case.execute(&authed.user_id()).await?;

    Ok(Json(ProfileResponse {
        id: user.user_id.to_string(),
        name: user.name,
        email: user.email.into_db(),
    }))
}

/// PUT /users/profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(authed): Extension<AuthenticatedUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UpdateProfileResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.config.clone());

    let patch = ProfilePatch {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(&authed.user_id(), patch).await?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        token: output.token,
        user: ProfileSummary {
            name: output.name,
            email: output.email,
        },
    }))
}
