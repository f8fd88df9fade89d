use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    routing::{get, post},
};

use stockledger_catalog::{Category, CategoryPatch, NewCategory};
use stockledger_core::CategoryId;
use stockledger_query::Visibility;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ActorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_category).get(list_categories))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// The category lookup path: all live rows, name ascending, no pagination.
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.reads.list_categories(Visibility::Live) {
        Ok(categories) => dto::ok(categories),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Json(body): Json<NewCategory>,
) -> axum::response::Response {
    match services
        .mutations
        .create::<Category>(body, actor.user_id, actor.ip.as_deref())
    {
        Ok(category) => dto::created(category),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services.reads.get_category(id, Visibility::Live) {
        Ok(category) => dto::ok(category),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
    Json(patch): Json<CategoryPatch>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .update::<Category>(id, patch, actor.user_id, actor.ip.as_deref())
    {
        Ok(category) => dto::ok(category),
        Err(err) => errors::domain_error_to_response(err),
    }
}

/// Soft-delete only. Products referencing the category keep their weak
/// reference; nothing cascades.
pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(actor): Extension<ActorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CategoryId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services
        .mutations
        .soft_delete::<Category>(id, actor.user_id, actor.ip.as_deref())
    {
        Ok(category) => dto::ok(category),
        Err(err) => errors::domain_error_to_response(err),
    }
}
