//! In-memory repositories for use-case tests.

use std::sync::Mutex;

use crate::domain::entity::{Order, Product};
use crate::domain::repository::{CatalogRepository, OrderRepository};
use crate::domain::value_object::{ProductId, UserId};
use crate::error::ShopResult;

pub(crate) struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogRepository for InMemoryCatalog {
    async fn list_all(&self) -> ShopResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> ShopResult<Option<Product>> {
        Ok(self
            .products
            .iter()
            .find(|p| p.product_id == *product_id)
            .cloned())
    }

    async fn find_by_ids(&self, product_ids: &[ProductId]) -> ShopResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| product_ids.contains(&p.product_id))
            .cloned()
            .collect())
    }
}

pub(crate) struct InMemoryOrders {
    orders: Mutex<Vec<Order>>,
}

impl InMemoryOrders {
    pub(crate) fn new() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

impl OrderRepository for InMemoryOrders {
    async fn create(&self, order: &Order) -> ShopResult<()> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> ShopResult<Vec<Order>> {
        let mut owned: Vec<Order> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == *user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

pub(crate) fn sample_product(name: &str, category: &str, price: f64) -> Product {
    Product {
        product_id: ProductId::new(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        image: format!("/images/{}.jpg", name.to_lowercase().replace(' ', "-")),
        occasion: "Party".to_string(),
        color: "Red".to_string(),
        description: format!("{name} for every occasion"),
    }
}

/// Catalog + orders in one value, for router-level tests.
pub(crate) struct InMemoryShop {
    pub(crate) catalog: InMemoryCatalog,
    pub(crate) orders: InMemoryOrders,
}

impl InMemoryShop {
    pub(crate) fn with_products(products: Vec<Product>) -> Self {
        Self {
            catalog: InMemoryCatalog::with_products(products),
            orders: InMemoryOrders::new(),
        }
    }
}

impl CatalogRepository for InMemoryShop {
    async fn list_all(&self) -> ShopResult<Vec<Product>> {
        self.catalog.list_all().await
    }

    async fn find_by_id(&self, product_id: &ProductId) -> ShopResult<Option<Product>> {
        self.catalog.find_by_id(product_id).await
    }

    async fn find_by_ids(&self, product_ids: &[ProductId]) -> ShopResult<Vec<Product>> {
        self.catalog.find_by_ids(product_ids).await
    }
}

impl OrderRepository for InMemoryShop {
    async fn create(&self, order: &Order) -> ShopResult<()> {
        self.orders.create(order).await
    }

    async fn find_by_user(&self, user_id: &UserId) -> ShopResult<Vec<Order>> {
        self.orders.find_by_user(user_id).await
    }
}
