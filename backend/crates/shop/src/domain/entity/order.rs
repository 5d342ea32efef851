//! Order Entity
//!
//! An order is an immutable record of a checkout: item snapshots taken
//! at purchase time, the recomputed total, and the shipping details.
//! Ownership is the authenticated user who placed it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{OrderId, OrderStatus, ProductId, UserId};

/// One purchased line: a snapshot of the product at checkout time.
///
/// Name and price are copied rather than referenced so later catalog
/// edits never rewrite order history. Serde impls exist because items
/// are persisted as a JSON document inside the order row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Order entity
#[derive(Debug, Clone)]
pub struct Order {
    /// Internal UUID identifier
    pub order_id: OrderId,
    /// Owning user, always taken from the authenticated identity
    pub user_id: UserId,
    /// Item snapshots, at least one
    pub items: Vec<OrderItem>,
    /// Total across items, recomputed server-side at placement
    pub total_price: f64,
    /// Shipping contact name
    pub customer_name: String,
    /// Shipping contact email
    pub customer_email: String,
    /// Free-form shipping address
    pub shipping_address: String,
    /// Lifecycle state, `Pending` at creation
    pub status: OrderStatus,
    /// Placement timestamp
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order owned by `user_id`.
    ///
    /// Status and timestamp are server-assigned; callers cannot pick them.
    pub fn new(
        user_id: UserId,
        items: Vec<OrderItem>,
        total_price: f64,
        customer_name: String,
        customer_email: String,
        shipping_address: String,
    ) -> Self {
        Self {
            order_id: OrderId::new(),
            user_id,
            items,
            total_price,
            customer_name,
            customer_email,
            shipping_address,
            status: OrderStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// Sum of price x quantity across all items.
    pub fn computed_total(items: &[OrderItem]) -> f64 {
        items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}
