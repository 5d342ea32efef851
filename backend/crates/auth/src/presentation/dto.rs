//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up / Login
// ============================================================================

/// Sign up request
///
/// Fields default to empty so a missing field becomes a 400
/// "All fields required" instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response for signup/login: a message plus the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Profile response. Deliberately has no password field at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Partial profile update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile fields echoed back after an update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
}

/// Update profile response: message, refreshed token, updated fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub message: String,
    pub token: String,
    pub user: ProfileSummary,
}
