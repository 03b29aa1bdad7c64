//! Declarative per-route request validation.
//!
//! Each route declares an ordered list of [`Rule`]s. A single runner
//! evaluates every rule independently (rules for the same field are not
//! short-circuited, so one field can yield several issues in one pass) and
//! the middleware short-circuits with 400 `{errors: [...]}` before the
//! handler runs. On success the request passes through untouched.

use crate::error::ValidationIssue;
use axum::{
    body::{to_bytes, Body},
    extract::{RawPathParams, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// Where a rule reads its input from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Source {
    Param,
    Body,
}

/// Predicates supported by the product routes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Check {
    NotEmpty,
    Numeric,
    GreaterThanZero,
    Int,
    Boolean,
}

/// One declared rule: a field, a predicate, and the message used on failure.
pub struct Rule {
    pub field: &'static str,
    pub source: Source,
    pub check: Check,
    pub message: &'static str,
}

const fn param(field: &'static str, check: Check, message: &'static str) -> Rule {
    Rule {
        field,
        source: Source::Param,
        check,
        message,
    }
}

const fn body(field: &'static str, check: Check, message: &'static str) -> Rule {
    Rule {
        field,
        source: Source::Body,
        check,
        message,
    }
}

/// GET/PATCH/DELETE `/:id`.
pub const BY_ID: &[Rule] = &[param("id", Check::Int, "ID no valido")];

/// POST `/`.
pub const CREATE: &[Rule] = &[
    body(
        "name",
        Check::NotEmpty,
        "El nombre del producto no puede ir vacio",
    ),
    body("price", Check::Numeric, "El valor debe ser un numero"),
    body(
        "price",
        Check::GreaterThanZero,
        "El valor debe ser mayor a cero",
    ),
    body(
        "price",
        Check::NotEmpty,
        "El precio del producto no puede ir vacio",
    ),
];

/// PUT `/:id`.
pub const UPDATE: &[Rule] = &[
    param("id", Check::Int, "ID no valido"),
    body(
        "name",
        Check::NotEmpty,
        "El nombre del producto no puede ir vacio",
    ),
    body("price", Check::Numeric, "El valor debe ser un numero"),
    body(
        "price",
        Check::GreaterThanZero,
        "El valor debe ser mayor a cero",
    ),
    body(
        "price",
        Check::NotEmpty,
        "El precio del producto no puede ir vacio",
    ),
    body(
        "available",
        Check::Boolean,
        "Error al marcar la disponibilidad",
    ),
];

/// Run every rule against the path params and body fields, in declaration
/// order. One issue per failing rule.
pub fn run_rules(
    rules: &[Rule],
    params: &[(&str, &str)],
    fields: &Map<String, Value>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for rule in rules {
        let value = match rule.source {
            Source::Param => params
                .iter()
                .find(|(name, _)| *name == rule.field)
                .map(|(_, raw)| Value::String((*raw).to_string())),
            Source::Body => fields.get(rule.field).cloned(),
        };
        if !passes(rule.check, value.as_ref()) {
            issues.push(ValidationIssue {
                kind: "field",
                value,
                msg: rule.message,
                path: rule.field,
                location: match rule.source {
                    Source::Param => "params",
                    Source::Body => "body",
                },
            });
        }
    }
    issues
}

fn passes(check: Check, value: Option<&Value>) -> bool {
    match check {
        Check::NotEmpty => match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        },
        Check::Numeric => as_number(value).is_some(),
        // Deliberately coerces the same way the numeric comparison does, so a
        // non-numeric value fails this check on top of `Numeric`.
        Check::GreaterThanZero => as_number(value).is_some_and(|n| n > 0.0),
        Check::Int => match value {
            Some(Value::String(s)) => s.parse::<i64>().is_ok(),
            Some(Value::Number(n)) => n.is_i64() || n.is_u64(),
            _ => false,
        },
        Check::Boolean => match value {
            Some(Value::Bool(_)) => true,
            Some(Value::String(s)) => s == "true" || s == "false",
            _ => false,
        },
    }
}

fn as_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

const BODY_LIMIT: usize = 1024 * 1024;

/// Middleware that applies a rule set before the handler. Buffers the body
/// so it can be inspected and then re-attached for the handler's extractor.
/// Installed per route via `middleware::from_fn_with_state(rules, enforce)`.
pub async fn enforce(
    State(rules): State<&'static [Rule]>,
    params: RawPathParams,
    req: Request,
    next: Next,
) -> Response {
    let params: Vec<(&str, &str)> = params.iter().collect();
    let (parts, raw_body) = req.into_parts();
    let bytes = match to_bytes(raw_body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return crate::error::AppError::BadRequest("could not read request body".into())
                .into_response()
        }
    };
    // Anything that is not a JSON object is treated as an absent body; the
    // per-field rules then report the declared messages.
    let fields = match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let issues = run_rules(rules, &params, &fields);
    if !issues.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "errors": issues })),
        )
            .into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body_fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn empty_create_body_fails_every_rule() {
        let issues = run_rules(CREATE, &[], &Map::new());
        assert_eq!(issues.len(), 4);
        assert_eq!(issues[0].msg, "El nombre del producto no puede ir vacio");
        assert_eq!(issues[0].location, "body");
    }

    #[test]
    fn negative_price_fails_only_the_sign_rule() {
        let fields = body_fields(json!({ "name": "monitor", "price": -5 }));
        let issues = run_rules(CREATE, &[], &fields);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].msg, "El valor debe ser mayor a cero");
        assert_eq!(issues[0].path, "price");
    }

    #[test]
    fn non_numeric_price_fails_two_independent_rules() {
        let fields = body_fields(json!({ "name": "monitor", "price": "monitor" }));
        let issues = run_rules(CREATE, &[], &fields);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].msg, "El valor debe ser un numero");
        assert_eq!(issues[1].msg, "El valor debe ser mayor a cero");
    }

    #[test]
    fn numeric_string_price_passes() {
        let fields = body_fields(json!({ "name": "monitor", "price": "300" }));
        assert!(run_rules(CREATE, &[], &fields).is_empty());
    }

    #[test]
    fn valid_create_body_passes() {
        let fields = body_fields(json!({ "name": "nombre de prueba", "price": 300 }));
        assert!(run_rules(CREATE, &[], &fields).is_empty());
    }

    #[test]
    fn non_integer_id_is_rejected() {
        let issues = run_rules(BY_ID, &[("id", "not-valid-id")], &Map::new());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].msg, "ID no valido");
        assert_eq!(issues[0].location, "params");
    }

    #[test]
    fn integer_id_passes() {
        assert!(run_rules(BY_ID, &[("id", "1")], &Map::new()).is_empty());
    }

    #[test]
    fn update_issues_come_in_declaration_order() {
        // Misspelled `available` plus a bad price: the price issue is
        // declared first, so it is errors[0].
        let fields = body_fields(json!({ "name": "Prueba", "avilable": true, "price": -20 }));
        let issues = run_rules(UPDATE, &[("id", "1")], &fields);
        assert_eq!(issues[0].msg, "El valor debe ser mayor a cero");
        assert_eq!(issues[1].msg, "Error al marcar la disponibilidad");
    }

    #[test]
    fn available_accepts_booleans_and_boolean_strings() {
        for ok in [json!(true), json!(false), json!("true"), json!("false")] {
            assert!(passes(Check::Boolean, Some(&ok)), "{ok} should pass");
        }
        for bad in [json!(1), json!("yes"), Value::Null] {
            assert!(!passes(Check::Boolean, Some(&bad)), "{bad} should fail");
        }
    }

    #[test]
    fn not_empty_rejects_null_and_empty_string_only() {
        assert!(!passes(Check::NotEmpty, None));
        assert!(!passes(Check::NotEmpty, Some(&Value::Null)));
        assert!(!passes(Check::NotEmpty, Some(&json!(""))));
        assert!(passes(Check::NotEmpty, Some(&json!(" "))));
        assert!(passes(Check::NotEmpty, Some(&json!(0))));
    }
}
