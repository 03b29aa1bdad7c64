//! Product CRUD handlers.
//!
//! Each handler performs one store call (the availability toggle does an
//! explicit read-modify-write) and shapes the `{data}` envelope. Input
//! validation never happens here; the rule middleware in
//! [`crate::validation`] runs first on every route that needs it.

use crate::error::AppError;
use crate::product::{CreateProduct, Product, UpdateProduct};
use crate::response::{data_created, data_ok, DataBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// Get a list of products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Succesfull response", body = DataBody<Vec<Product>>)
    )
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state.store.list().await?;
    Ok(data_ok(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The product ID")),
    responses(
        (status = 200, description = "Succesfull response", body = DataBody<Product>),
        (status = 404, description = "Not found"),
        (status = 400, description = "Bad request - invalid ID")
    )
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.store.find(id).await?.ok_or(AppError::NotFound)?;
    Ok(data_ok(product))
}

/// Creates a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = DataBody<Product>),
        (status = 400, description = "Bad request - invalid input data")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> Result<impl IntoResponse, AppError> {
    let product = state.store.create(&input).await?;
    Ok(data_created(product))
}

/// Update a product by id
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Succesfull update", body = DataBody<Product>),
        (status = 404, description = "Not found"),
        (status = 400, description = "Bad request - invalid input data")
    )
)]
pub async fn edit_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateProduct>,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .store
        .replace(id, &input)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(data_ok(product))
}

/// Update availability for a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The product ID")),
    responses(
        (status = 200, description = "Succesfull update", body = DataBody<Product>),
        (status = 404, description = "Not found"),
        (status = 400, description = "Bad request - invalid ID")
    )
)]
pub async fn update_product_available(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let current = state.store.find(id).await?.ok_or(AppError::NotFound)?;
    let flipped = UpdateProduct {
        name: current.name,
        price: current.price,
        available: !current.available,
    };
    let product = state
        .store
        .replace(id, &flipped)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(data_ok(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The product ID")),
    responses(
        (status = 200, description = "Succesfull delete", body = DataBody<String>),
        (status = 404, description = "Not found"),
        (status = 400, description = "Bad request - invalid ID")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound);
    }
    Ok(data_ok("Producto eliminado".to_string()))
}
