//! Product entity and request payloads.
//!
//! Timestamp columns (`created_at` / `updated_at`) are maintained by the
//! store and never leave it, so they are not part of the entity type.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    /// The product ID
    #[schema(example = 1)]
    pub id: i64,
    /// The product name
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    /// The product price
    #[schema(example = 399.0)]
    pub price: f64,
    /// The product availability
    #[schema(example = true)]
    pub available: bool,
}

/// Body of `POST /api/products`. Availability defaults to true on creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.0)]
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
}

/// Body of `PUT /api/products/:id`. All three fields are overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.0)]
    #[serde(deserialize_with = "lenient_price")]
    pub price: f64,
    #[schema(example = true)]
    #[serde(deserialize_with = "lenient_bool")]
    pub available: bool,
}

// The validation rules accept numeric strings and "true"/"false" strings, so
// the payload types must coerce them the same way; anything that clears the
// rules deserializes here.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom("price out of range")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom("price must be a number")),
        _ => Err(de::Error::custom("price must be a number")),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::String(s) if s == "true" => Ok(true),
        Value::String(s) if s == "false" => Ok(false),
        _ => Err(de::Error::custom("available must be a boolean")),
    }
}
