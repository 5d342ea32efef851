//! Typed identifiers for shop entities

pub use kernel::id::{OrderId, ProductId, UserId};
