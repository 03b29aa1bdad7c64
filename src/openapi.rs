//! OpenAPI document for the products API.

use crate::handlers;
use crate::product::{CreateProduct, Product, UpdateProduct};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Rust / Axum / PostgreSQL",
        description = "API Docs for products"
    ),
    paths(
        handlers::get_products,
        handlers::get_product_by_id,
        handlers::create_product,
        handlers::edit_product_by_id,
        handlers::update_product_available,
        handlers::delete_product,
    ),
    components(schemas(Product, CreateProduct, UpdateProduct)),
    tags((name = "Products", description = "API operations for products"))
)]
pub struct ApiDoc;
