use async_trait::async_trait;
use sqlx::SqlitePool;
use validator::Validate;

use crate::models::{CreateProductRequest, Product};
use crate::utils::{ApiError, ApiResult};

/// Read access to the product catalog, as seen by route handlers.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Every product currently stored. Order is not part of the contract.
    async fn list_all(&self) -> ApiResult<Vec<Product>>;
}

#[derive(Clone)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a single validated product
    pub async fn create_product(&self, req: CreateProductRequest) -> ApiResult<Product> {
        validate_product(&req)?;

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(&req.name)
            .bind(req.price)
            .execute(&self.pool)
            .await?;

        let product: Product = sqlx::query_as("SELECT * FROM products WHERE id = ?")
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await?;

        tracing::info!("Product created: {}", product.describe());
        Ok(product)
    }

    /// Insert a batch of products atomically. Any invalid record rejects the
    /// whole batch before anything is written.
    pub async fn import_products(&self, reqs: Vec<CreateProductRequest>) -> ApiResult<usize> {
        for (index, req) in reqs.iter().enumerate() {
            validate_product(req).map_err(|err| match err {
                ApiError::ValidationError(details) => {
                    ApiError::validation_error(format!("record {}: {}", index, details))
                },
                other => other,
            })?;
        }

        let mut tx = self.pool.begin().await?;
        for req in &reqs {
            sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
                .bind(&req.name)
                .bind(req.price)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!("Imported {} products", reqs.len());
        Ok(reqs.len())
    }
}

#[async_trait]
impl ProductCatalog for ProductService {
    async fn list_all(&self) -> ApiResult<Vec<Product>> {
        let products: Vec<Product> = sqlx::query_as("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::warn!("Catalog read failed: {}", err);
                ApiError::catalog_unavailable(err)
            })?;

        tracing::debug!("Catalog read returned {} products", products.len());
        Ok(products)
    }
}

fn validate_product(req: &CreateProductRequest) -> ApiResult<()> {
    // range(min = 0.0) lets NaN and +inf through
    if !req.price.is_finite() {
        return Err(ApiError::validation_error(format!(
            "price must be a finite number, got {}",
            req.price
        )));
    }
    req.validate()?;
    Ok(())
}
