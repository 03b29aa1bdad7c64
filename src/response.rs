//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// The `{data}` wrapper every success response uses.
#[derive(Serialize, ToSchema)]
pub struct DataBody<T> {
    pub data: T,
}

pub fn data_ok<T: Serialize>(data: T) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::OK, Json(DataBody { data }))
}

pub fn data_created<T: Serialize>(data: T) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::CREATED, Json(DataBody { data }))
}
