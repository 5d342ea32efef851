//! Application Layer - Use Cases

pub mod catalog;
pub mod list_orders;
pub mod place_order;

pub use catalog::{GetProductUseCase, ListProductsUseCase};
pub use list_orders::{ExpandedItem, ExpandedOrder, ListOrdersUseCase, ProductSnapshot};
pub use place_order::{NewOrderItem, PlaceOrderInput, PlaceOrderUseCase};
