//! Product store: the trait seam plus the PostgreSQL implementation.

use crate::error::AppError;
use crate::product::{CreateProduct, Product, UpdateProduct};
use async_trait::async_trait;
use sqlx::PgPool;

/// Typed accessors over the products table. Handlers only see this trait;
/// the pool-backed implementation is injected at bootstrap.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, AppError>;
    async fn find(&self, id: i64) -> Result<Option<Product>, AppError>;
    async fn create(&self, input: &CreateProduct) -> Result<Product, AppError>;
    /// Overwrites name/price/available in one statement. Returns the updated
    /// row, or None when the id does not resolve.
    async fn replace(&self, id: i64, input: &UpdateProduct) -> Result<Option<Product>, AppError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

// Timestamps never leave the store.
const COLUMNS: &str = "id, name, price, available";

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: &CreateProduct) -> Result<Product, AppError> {
        let sql = format!("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {COLUMNS}");
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(input.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn replace(&self, id: i64, input: &UpdateProduct) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE products SET name = $1, price = $2, available = $3, updated_at = NOW() \
             WHERE id = $4 RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.available)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM products WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
