//! Product Service

use crate::db::repository::{self, RepoError, RepoResult};
use shared::models::{Product, ProductCreate};
use sqlx::SqlitePool;

/// Catalog product management
#[derive(Clone)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new product
    ///
    /// The price must be present and non-negative.
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let price = data
            .price
            .ok_or_else(|| RepoError::Validation("Product price is required".into()))?;
        if price < 0 {
            return Err(RepoError::Validation(format!(
                "Product price must not be negative: {price}"
            )));
        }

        let product = repository::product::create(&self.pool, &data.name, price).await?;
        tracing::info!("Product created: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// List all products
    pub async fn list(&self) -> RepoResult<Vec<Product>> {
        repository::product::find_all(&self.pool).await
    }
}
