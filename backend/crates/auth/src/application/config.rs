//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is
//! loaded once at startup and injected here; its absence is a
//! startup-fatal misconfiguration handled by the binary, never a
//! runtime error.

use std::time::Duration;

/// Fixed bearer token lifetime (7 days).
pub const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide secret for HS256 token signing
    pub token_secret: String,
    /// Bearer token time-to-live
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Create config with the standard 7-day token TTL
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: TOKEN_TTL,
        }
    }

    /// Override the token TTL (tests only need this)
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
