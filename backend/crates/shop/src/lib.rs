//! Shop Backend Module - Catalog and Orders
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Read-only product catalog (list + lookup)
//! - Order placement from a client-held cart (server recomputes totals)
//! - Per-user order history with current catalog data joined in
//!
//! The cart itself lives on the client; it only materializes here at
//! checkout as an immutable order row.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use error::{ShopError, ShopResult};
pub use infra::postgres::PgShopRepository;
pub use presentation::router::{catalog_router, orders_router};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgShopRepository as ShopStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
