//! Auth Middleware (the auth gate)
//!
//! The single authorization checkpoint. Every identity-scoped route is
//! layered with [`require_auth`]; on success the verified identity is
//! attached to request extensions and downstream handlers read it from
//! there, never from the request body.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::identity::AuthenticatedUser;

use crate::application::config::AuthConfig;
use crate::error::AuthError;
use crate::token;

/// Middleware state. Token verification is stateless, so the signing
/// config is all that's needed.
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer token.
///
/// - header absent: 401 "No token provided"
/// - header present but token malformed/tampered/expired: 401 "Invalid token"
/// - success: `AuthenticatedUser` inserted into request extensions
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AuthError::NoToken.into_response())?;

    let header_str = header_value
        .to_str()
        .map_err(|_| AuthError::InvalidToken.into_response())?;

    // "Bearer <token>" — everything after the scheme word
    let token = header_str
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| AuthError::InvalidToken.into_response())?;

    let user_id =
        token::verify(token, &state.config).map_err(|e| e.into_response())?;

    req.extensions_mut().insert(AuthenticatedUser(user_id));

    Ok(next.run(req).await)
}
