//! Product Entity
//!
//! Catalog entries are read-only from this service's point of view;
//! rows are seeded externally.

use crate::domain::value_object::ProductId;

/// Product entity
#[derive(Debug, Clone)]
pub struct Product {
    /// Internal UUID identifier
    pub product_id: ProductId,
    /// Display name
    pub name: String,
    /// Category label (Dress / Accessory / Footwear)
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Image path, served by the static frontend host
    pub image: String,
    /// Occasion tag (client-side filtering only)
    pub occasion: String,
    /// Color tag (client-side filtering only)
    pub color: String,
    /// Long description
    pub description: String,
}
