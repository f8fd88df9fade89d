use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    routing::{get, post},
};

use stockledger_catalog::{NewSupplier, Supplier, SupplierPatch};
use stockledger_core::SupplierId;
use stockledger_query::{Pagination, SupplierFilter, Visibility};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ActorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_supplier).get(list_suppliers))
        .route(
            "/:id",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

pub async fn list_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SupplierListQuery>,
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

    let filter = SupplierFilter {
        is_active,
        search: query.search,
        visibility: Visibility::Live,
    };
    match services
        .reads
        .list_suppliers(&filter, Pagination::new(query.page, query.limit))
    {
        Ok(page) => dto::ok_page(page),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<NewSupplier>,
) -> axum::response::Response {
    match services
        .mutations
        .create::<Supplier>(body, actor.user_id, actor.ip.as_deref())
    {
        Ok(supplier) => dto::created(supplier),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SupplierId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services.reads.get_supplier(id, Visibility::Live) {
        Ok(supplier) => dto::ok(supplier),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
    Json(patch): Json<SupplierPatch>,
) -> axum::response::Response {
    let id: SupplierId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .update::<Supplier>(id, patch, actor.user_id, actor.ip.as_deref())
    {
        Ok(supplier) => dto::ok(supplier),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SupplierId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .soft_delete::<Supplier>(id, actor.user_id, actor.ip.as_deref())
    {
        Ok(supplier) => dto::ok(supplier),
        Err(err) => errors::domain_error_to_response(err),
    }
}
