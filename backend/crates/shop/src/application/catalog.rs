//! Catalog Use Cases

use std::sync::Arc;

use crate::domain::entity::Product;
use crate::domain::repository::CatalogRepository;
use crate::domain::value_object::ProductId;
use crate::error::{ShopError, ShopResult};

/// List the whole catalog.
pub struct ListProductsUseCase<C>
where
    C: CatalogRepository + Send + Sync,
{
    catalog: Arc<C>,
}

impl<C> ListProductsUseCase<C>
where
    C: CatalogRepository + Send + Sync,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> ShopResult<Vec<Product>> {
        self.catalog.list_all().await
    }
}

/// Look up a single product.
pub struct GetProductUseCase<C>
where
    C: CatalogRepository + Send + Sync,
{
    catalog: Arc<C>,
}

impl<C> GetProductUseCase<C>
where
    C: CatalogRepository + Send + Sync,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self, product_id: &ProductId) -> ShopResult<Product> {
        self.catalog
            .find_by_id(product_id)
            .await?
            .ok_or(ShopError::ProductNotFound)
    }
}
