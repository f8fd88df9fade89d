//! Router assembly.

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{Extension, Router, middleware};

use crate::context;
use services::AppServices;

/// Build the application with a fresh in-memory store.
pub fn build() -> Router {
    build_with_services(Arc::new(AppServices::new()))
}

/// Build the application over pre-wired services (used by tests).
pub fn build_with_services(services: Arc<AppServices>) -> Router {
    Router::new()
        .nest("/api/products", routes::products::router())
        .nest("/api/categories", routes::categories::router())
        .nest("/api/locations", routes::locations::router())
        .nest("/api/suppliers", routes::suppliers::router())
        .nest("/api/stock", routes::stock::router())
        .nest("/api/audit", routes::audit::router())
        .layer(middleware::from_fn(context::actor_context))
        .layer(Extension(services))
}
