//! List Orders Use Case
//!
//! Per-user order history. Each stored item keeps its checkout-time
//! snapshot; on read, the current catalog entry for the referenced
//! product is joined in additively so the client can show live images
//! and categories. A product deleted from the catalog expands to
//! nothing while the snapshot survives.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entity::{Order, Product};
use crate::domain::repository::{CatalogRepository, OrderRepository};
use crate::domain::value_object::{ProductId, UserId};
use crate::error::ShopResult;

/// Current catalog fields joined onto a history item.
#[derive(Debug, Clone)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

/// A stored item plus its catalog expansion (if the product still exists).
#[derive(Debug, Clone)]
pub struct ExpandedItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub product: Option<ProductSnapshot>,
}

/// An order with every item expanded.
#[derive(Debug, Clone)]
pub struct ExpandedOrder {
    pub order: Order,
    pub items: Vec<ExpandedItem>,
}

/// List orders use case
pub struct ListOrdersUseCase<O, C>
where
    O: OrderRepository + Send + Sync,
    C: CatalogRepository + Send + Sync,
{
    orders: Arc<O>,
    catalog: Arc<C>,
}

impl<O, C> ListOrdersUseCase<O, C>
where
    O: OrderRepository + Send + Sync,
    C: CatalogRepository + Send + Sync,
{
    pub fn new(orders: Arc<O>, catalog: Arc<C>) -> Self {
        Self { orders, catalog }
    }

    /// Orders owned by `user_id`, newest first, catalog-expanded.
    pub async fn execute(&self, user_id: &UserId) -> ShopResult<Vec<ExpandedOrder>> {
        let orders = self.orders.find_by_user(user_id).await?;

        // One batched catalog lookup across every referenced product.
        let mut ids: Vec<ProductId> = orders
            .iter()
            .flat_map(|o| o.items.iter().map(|i| i.product_id))
            .collect();
        ids.sort_unstable_by_key(|id| *id.as_uuid());
        ids.dedup();

        let by_id: HashMap<ProductId, Product> = self
            .catalog
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|p| (p.product_id, p))
            .collect();

        let expanded = orders
            .into_iter()
            .map(|order| {
                let items = order
                    .items
                    .iter()
                    .map(|item| ExpandedItem {
                        product_id: item.product_id,
                        name: item.name.clone(),
                        price: item.price,
                        quantity: item.quantity,
                        product: by_id.get(&item.product_id).map(|p| ProductSnapshot {
                            product_id: p.product_id,
                            name: p.name.clone(),
                            price: p.price,
                            image: p.image.clone(),
                            category: p.category.clone(),
                        }),
                    })
                    .collect();
                ExpandedOrder { order, items }
            })
            .collect();

        Ok(expanded)
    }
}
