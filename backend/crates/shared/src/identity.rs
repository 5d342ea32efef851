//! Request-Scoped Identity
//!
//! The authenticated identity attached to a request by the auth gate.
//! Handlers for identity-scoped operations read this from request
//! extensions instead of trusting any client-supplied user id field.

use crate::id::UserId;

/// Identity of the authenticated user for the current request.
///
/// Inserted into request extensions by the bearer-token middleware after
/// successful verification. Lives only for the duration of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    /// The verified user id.
    pub fn user_id(&self) -> UserId {
        self.0
    }
}
