//! Database bootstrap: pool construction, connection probe, table DDL.

use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Marker logged when the startup probe cannot reach the database.
pub const DB_CONNECT_ERROR: &str = "Hubo un error al conectar a la base";

/// Opens the pool and probes the connection once. A failed probe is logged
/// with [`DB_CONNECT_ERROR`] and tolerated: the pool is returned anyway and
/// store errors surface per request instead of aborting startup. Only an
/// unusable URL is a hard error.
pub async fn connect_db(database_url: &str) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;

    match authenticate(&pool).await {
        Ok(()) => tracing::info!("Conexion exitosa"),
        Err(e) => tracing::error!(error = %e, "{}", DB_CONNECT_ERROR),
    }
    Ok(pool)
}

async fn authenticate(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    ensure_products_table(pool).await
}

/// Create the products table if it does not exist. Timestamps live here and
/// are maintained by the store; they are never part of a response.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            available BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}
