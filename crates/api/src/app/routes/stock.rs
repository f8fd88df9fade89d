use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    routing::{get, put},
};

use stockledger_core::{LocationId, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", put(set_stock))
        .route("/product/:id", get(stock_by_product))
        .route("/location/:id", get(stock_by_location))
}

/// Last-write-wins upsert on one `(product, location)` pair.
///
/// Callers computing deltas ("add 50 units") must read-then-write; the
/// ledger itself never merges concurrent values.
pub async fn set_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SetStockRequest>,
) -> axum::response::Response {
    match services
        .ledger()
        .set_quantity(body.product_id, body.location_id, body.quantity)
    {
        Ok(row) => dto::ok(row),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn stock_by_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services.reads.product_stock(id) {
        Ok((rows, total)) => dto::ok(serde_json::json!({
            "rows": rows,
            "totalQuantity": total,
        })),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn stock_by_location(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: LocationId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services.reads.location_stock(id) {
        Ok(rows) => dto::ok(rows),
        Err(err) => errors::domain_error_to_response(err),
    }
}
