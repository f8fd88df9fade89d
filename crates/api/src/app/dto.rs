//! Request/response shapes and envelope helpers.
//!
//! Entity bodies deserialize straight into the catalog's `New*`/`*Patch`
//! types; this module only adds the list query parameters, the stock upsert
//! body, and the `{ok, data, meta}` envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use serde_json::json;

use stockledger_core::{CategoryId, LocationId, ProductId, UserId};
use stockledger_query::Page;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category_id: Option<CategoryId>,
    pub is_active: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub is_active: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub entity: Option<String>,
    pub action: Option<String>,
    pub user_id: Option<UserId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateProductsRequest {
    pub products: Vec<stockledger_catalog::NewProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStockRequest {
    pub product_id: ProductId,
    pub location_id: LocationId,
    pub quantity: i64,
}

/// The list contract accepts booleans as the strings "true"/"false".
pub fn parse_bool_param(value: &str) -> Result<bool, axum::response::Response> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("expected \"true\" or \"false\", got {other:?}"),
        )),
    }
}

// -------------------------
// Response envelopes
// -------------------------

pub fn ok<T: Serialize>(data: T) -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "ok": true, "data": data }))).into_response()
}

pub fn created<T: Serialize>(data: T) -> axum::response::Response {
    (StatusCode::CREATED, Json(json!({ "ok": true, "data": data }))).into_response()
}

pub fn ok_page<T: Serialize>(page: Page<T>) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "ok": true,
            "data": page.items,
            "meta": {
                "page": page.page,
                "limit": page.limit,
                "total": page.total,
                "totalPages": page.total_pages,
            },
        })),
    )
        .into_response()
}
