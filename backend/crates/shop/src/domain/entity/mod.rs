//! Domain Entities

pub mod order;
pub mod product;

pub use order::{Order, OrderItem};
pub use product::Product;
