//! REST API for a product catalog: axum routing, declarative request
//! validation, and a PostgreSQL-backed store.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod product;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Config;
pub use db::{connect_db, ensure_products_table, DB_CONNECT_ERROR};
pub use error::{AppError, ConfigError, ValidationIssue};
pub use openapi::ApiDoc;
pub use product::{CreateProduct, Product, UpdateProduct};
pub use routes::{api_root, product_routes};
pub use state::AppState;
pub use store::{PgProductStore, ProductStore};
