use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    routing::{get, post},
};

use stockledger_catalog::{NewProduct, Product, ProductPatch};
use stockledger_core::ProductId;
use stockledger_query::{Pagination, ProductFilter, Visibility};
use stockledger_service::BulkOutcome;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ActorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/bulk", post(bulk_create_products))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/stock", get(product_stock))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ProductListQuery>,
) -> axum::response::Response {
    let is_active = match query
        .is_active
        .as_deref()
        .map(dto::parse_bool_param)
        .transpose()
    {
        Ok(value) => value,
        Err(resp) => return resp,
    };

    let filter = ProductFilter {
        category_id: query.category_id,
        is_active,
        search: query.search,
        visibility: Visibility::Live,
    };
    match services
        .reads
        .list_products(&filter, Pagination::new(query.page, query.limit))
    {
        Ok(page) => dto::ok_page(page),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<NewProduct>,
) -> axum::response::Response {
    match services
        .mutations
        .create::<Product>(body, actor.user_id, actor.ip.as_deref())
    {
        Ok(product) => dto::created(product),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn bulk_create_products(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<dto::BulkCreateProductsRequest>,
) -> axum::response::Response {
    match services
        .mutations
        .bulk_create::<Product>(body.products, actor.user_id, actor.ip.as_deref())
    {
        Ok(BulkOutcome { created, items }) => dto::created(serde_json::json!({
            "created": created,
            "products": items,
        })),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services.reads.get_product(id, Visibility::Live) {
        Ok(product) => dto::ok(product),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .update::<Product>(id, patch, actor.user_id, actor.ip.as_deref())
    {
        Ok(product) => dto::ok(product),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .soft_delete::<Product>(id, actor.user_id, actor.ip.as_deref())
    {
        Ok(product) => dto::ok(product),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn product_stock(
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
