use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    routing::{get, post},
};

use stockledger_catalog::{Location, LocationPatch, NewLocation};
use stockledger_core::LocationId;
use stockledger_query::{Pagination, Visibility};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ActorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_location).get(list_locations))
        .route(
            "/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
}

pub async fn list_locations(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PageQuery>,
) -> axum::response::Response {
    match services
        .reads
        .list_locations(Visibility::Live, Pagination::new(query.page, query.limit))
    {
        Ok(page) => dto::ok_page(page),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<NewLocation>,
) -> axum::response::Response {
    match services
        .mutations
        .create::<Location>(body, actor.user_id, actor.ip.as_deref())
    {
        Ok(location) => dto::created(location),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_location(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: LocationId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services.reads.get_location(id, Visibility::Live) {
        Ok(location) => dto::ok(location),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
    Json(patch): Json<LocationPatch>,
) -> axum::response::Response {
    let id: LocationId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .update::<Location>(id, patch, actor.user_id, actor.ip.as_deref())
    {
        Ok(location) => dto::ok(location),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn delete_location(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: LocationId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .soft_delete::<Location>(id, actor.user_id, actor.ip.as_deref())
    {
        Ok(location) => dto::ok(location),
        Err(err) => errors::domain_error_to_response(err),
    }
}
