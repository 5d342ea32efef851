//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup/login with email + password
//! - Partial profile update (name/email/password)
//! - Stateless bearer tokens (JWT, 7-day expiry, no revocation)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Tokens signed with a process-wide secret loaded once at startup
//! - A single middleware checkpoint converts the bearer header into a
//!   trusted identity; no handler trusts a client-supplied user id

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGateState, require_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
