//! HTTP endpoints exposing the validators, one function per validator:
//!
//! - `GET|POST /api/ValidateNZBankAccount` with an `accountNumber` parameter
//! - `GET|POST /api/ValidateNZIRDNumber` with an `irdNumber` parameter
//!
//! The parameter is read from the query string, then from the JSON body of a POST.

use crate::config::ValidatorKind;
use crate::observability::labels::Labels;
use crate::observability::metrics::record_missing_parameter;
use crate::validation_result::ValidationResult;
use axum::{
    body::Bytes,
    extract::Query,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tower_http::cors::CorsLayer;

/// Router serving every validator under `/api`.
pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route(
            &function_path(ValidatorKind::NzBankAccount),
            get(validate_bank_account).post(validate_bank_account),
        )
        .route(
            &function_path(ValidatorKind::NzIrdNumber),
            get(validate_ird_number).post(validate_ird_number),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

fn function_path(kind: ValidatorKind) -> String {
    format!("/{}", kind.function_name())
}

/// GET /api/health
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn validate_bank_account(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    handle_validation(ValidatorKind::NzBankAccount, &method, &query, &body)
}

async fn validate_ird_number(
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    handle_validation(ValidatorKind::NzIrdNumber, &method, &query, &body)
}

fn handle_validation(
    kind: ValidatorKind,
    method: &Method,
    query: &HashMap<String, String>,
    body: &[u8],
) -> Response {
    match extract_parameter(kind.parameter_name(), method, query, body) {
        Some(input) => (StatusCode::OK, Json(kind.validate(&input))).into_response(),
        None => {
            record_missing_parameter(&Labels::for_validator(kind.metric_name()));
            (
                StatusCode::BAD_REQUEST,
                Json(ValidationResult::invalid(format!(
                    "Missing required parameter: {}",
                    kind.parameter_name()
                ))),
            )
                .into_response()
        }
    }
}

/// Non-empty value of `name`, from the query string first and then from a JSON body when
/// the request is a POST. A body that is not JSON, or a field that is not a string, is ignored.
fn extract_parameter(
    name: &str,
    method: &Method,
    query: &HashMap<String, String>,
    body: &[u8],
) -> Option<String> {
    if let Some(value) = query.get(name).filter(|value| !value.is_empty()) {
        return Some(value.clone());
    }
    if *method != Method::POST {
        return None;
    }

    let body: Value = serde_json::from_slice(body).ok()?;
    body.get(name)?
        .as_str()
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
