//! Data Transfer Objects
//!
//! Wire shapes for the storefront client. All field names are
//! camelCase; money stays `f64` to match the client's number handling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{ExpandedItem, ExpandedOrder, ProductSnapshot};
use crate::domain::entity::{Order, Product};
use crate::domain::value_object::ProductId;

// ============================================================================
// Catalog
// ============================================================================

/// Product as sent to the client
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub occasion: String,
    pub color: String,
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.product_id.to_string(),
            name: p.name,
            category: p.category,
            price: p.price,
            image: p.image,
            occasion: p.occasion,
            color: p.color,
            description: p.description,
        }
    }
}

// ============================================================================
// Orders
// ============================================================================

/// One cart line in a place-order request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
}

/// Place-order request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub shipping_address: String,
}

/// Current catalog data joined onto a history item
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

impl From<ProductSnapshot> for ProductSummaryResponse {
    fn from(s: ProductSnapshot) -> Self {
        Self {
            id: s.product_id.to_string(),
            name: s.name,
            price: s.price,
            image: s.image,
            category: s.category,
        }
    }
}

/// One order line in a response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    /// Live catalog data; absent right after placement and for products
    /// that have since left the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductSummaryResponse>,
}

/// Order as sent to the client
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub total_price: f64,
    pub customer_name: String,
    pub customer_email: String,
    pub shipping_address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.order_id.to_string(),
            user_id: order.user_id.to_string(),
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    product_id: item.product_id.to_string(),
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                    product: None,
                })
                .collect(),
            total_price: order.total_price,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            shipping_address: order.shipping_address,
            status: order.status.as_str().to_string(),
            created_at: order.created_at,
        }
    }
}

impl From<ExpandedOrder> for OrderResponse {
    fn from(expanded: ExpandedOrder) -> Self {
        let order = expanded.order;
        Self {
            id: order.order_id.to_string(),
            user_id: order.user_id.to_string(),
            items: expanded
                .items
                .into_iter()
                .map(|item: ExpandedItem| OrderItemResponse {
                    product_id: item.product_id.to_string(),
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                    product: item.product.map(ProductSummaryResponse::from),
                })
                .collect(),
            total_price: order.total_price,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            shipping_address: order.shipping_address,
            status: order.status.as_str().to_string(),
            created_at: order.created_at,
        }
    }
}
