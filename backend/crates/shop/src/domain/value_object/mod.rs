//! Value Objects

pub mod ids;
pub mod order_status;

pub use ids::{OrderId, ProductId, UserId};
pub use order_status::OrderStatus;
