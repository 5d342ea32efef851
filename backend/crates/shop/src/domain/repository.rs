//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::{Order, Product};
use crate::domain::value_object::{ProductId, UserId};
use crate::error::ShopResult;

/// Product catalog repository trait (read-only)
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// All catalog entries, no filtering or pagination
    async fn list_all(&self) -> ShopResult<Vec<Product>>;

    /// Find product by ID
    async fn find_by_id(&self, product_id: &ProductId) -> ShopResult<Option<Product>>;

    /// Batch lookup used by the order history join.
    ///
    /// Ids with no matching product are simply absent from the result.
    async fn find_by_ids(&self, product_ids: &[ProductId]) -> ShopResult<Vec<Product>>;
}

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Persist a new order as a single atomic insert
    async fn create(&self, order: &Order) -> ShopResult<()>;

    /// Orders owned by `user_id`, newest first
    async fn find_by_user(&self, user_id: &UserId) -> ShopResult<Vec<Order>>;
}
