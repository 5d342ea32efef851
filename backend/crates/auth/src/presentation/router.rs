//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGateState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };
    let gate = AuthGateState { config };

    // Profile routes sit behind the auth gate; signup/login are open.
    let protected = Router::new()
        .route(
            "/users/profile",
            get(handlers::get_profile::<R>).put(handlers::update_profile::<R>),
        )
        .route_layer(axum::middleware::from_fn_with_state(gate, require_auth));

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .merge(protected)
        .with_state(state)
}
