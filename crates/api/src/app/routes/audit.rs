use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Path, Query},
    routing::get,
};
use uuid::Uuid;

use stockledger_audit::AuditAction;
use stockledger_catalog::EntityKind;
use stockledger_core::{AuditLogId, DomainError};
use stockledger_query::{AuditFilter, Pagination};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_audit))
        .route("/:id", get(get_audit))
        .route("/entity/:entity/:entity_id", get(audit_by_entity))
}

pub async fn list_audit(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::AuditListQuery>,
) -> axum::response::Response {
    let entity = match query.entity.as_deref().map(str::parse::<EntityKind>).transpose() {
        Ok(value) => value,
        Err(err) => return errors::domain_error_to_response(err),
    };
    let action = match query.action.as_deref().map(str::parse::<AuditAction>).transpose() {
        Ok(value) => value,
        Err(err) => return errors::domain_error_to_response(err),
    };

    let filter = AuditFilter {
        entity,
        action,
        user_id: query.user_id,
        entity_id: None,
    };
    match services
        .reads
        .list_audit(&filter, Pagination::new(query.page, query.limit))
    {
        Ok(page) => dto::ok_page(page),
        Err(err) => errors::domain_error_to_response(err),
    }
}

pub async fn get_audit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: AuditLogId = match id.parse() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match services.reads.get_audit(id) {
        Ok(log) => dto::ok(log),
        Err(err) => errors::domain_error_to_response(err),
    }
}

/// One entity's history, newest first.
pub async fn audit_by_entity(
    Extension(services): Extension<Arc<AppServices>>,
    Path((entity, entity_id)): Path<(String, String)>,
    Query(query): Query<dto::PageQuery>,
) -> axum::response::Response {
    let entity: EntityKind = match entity.parse() {
        Ok(kind) => kind,
        Err(err) => return errors::domain_error_to_response(err),
    };
    let entity_id: Uuid = match entity_id.parse() {
        Ok(id) => id,
        Err(err) => {
            return errors::domain_error_to_response(DomainError::invalid_id(format!(
                "entity id: {err}"
            )));
        }
    };

    let filter = AuditFilter {
        entity: Some(entity),
        action: None,
        user_id: None,
        entity_id: Some(entity_id),
    };
    match services
        .reads
        .list_audit(&filter, Pagination::new(query.page, query.limit))
    {
        Ok(page) => dto::ok_page(page),
        Err(err) => errors::domain_error_to_response(err),
    }
}
