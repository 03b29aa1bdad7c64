//! Route table. Validation layers are bound per route and always precede
//! the handler.

use crate::handlers;
use crate::state::AppState;
use crate::validation::{self, enforce};
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Json, Router,
};

/// Product resource routes, mounted under `/api/products`.
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_products))
        .route(
            "/",
            post(handlers::create_product)
                .route_layer(from_fn_with_state(validation::CREATE, enforce)),
        )
        .route(
            "/:id",
            get(handlers::get_product_by_id)
                .route_layer(from_fn_with_state(validation::BY_ID, enforce)),
        )
        .route(
            "/:id",
            put(handlers::edit_product_by_id)
                .route_layer(from_fn_with_state(validation::UPDATE, enforce)),
        )
        .route(
            "/:id",
            patch(handlers::update_product_available)
                .route_layer(from_fn_with_state(validation::BY_ID, enforce)),
        )
        .route(
            "/:id",
            delete(handlers::delete_product)
                .route_layer(from_fn_with_state(validation::BY_ID, enforce)),
        )
        .with_state(state)
}

async fn api_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "msg": "Desde API" }))
}

/// Liveness route at `GET /api`.
pub fn api_root() -> Router {
    Router::new().route("/api", get(api_index))
}
