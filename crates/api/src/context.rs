//! Actor identity, supplied per request by upstream auth middleware.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use stockledger_core::UserId;

use crate::app::errors;

/// The authenticated actor behind a request. The core never authenticates;
/// it only records the identity it is given.
#[derive(Debug, Clone)]
pub struct ActorContext {
    pub user_id: UserId,
    pub ip: Option<String>,
}

/// Extract the actor identity placed on the request by the auth layer.
pub async fn actor_context(mut req: Request, next: Next) -> Response {
    let actor = req
        .headers()
        .get("x-actor-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<UserId>().ok());
    let Some(user_id) = actor else {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "missing or invalid x-actor-id header",
        );
    };

    let ip = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string());

    req.extensions_mut().insert(ActorContext { user_id, ip });
    next.run(req).await
}
