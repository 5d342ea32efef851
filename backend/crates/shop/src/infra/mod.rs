//! Infrastructure Layer
//!
//! Database implementations of the domain repository traits.

pub mod postgres;

pub use postgres::PgShopRepository;
