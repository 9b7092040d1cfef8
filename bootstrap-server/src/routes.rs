use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::Response, routing::get, Router};

use auth_gateway::AuthenticationHook;

use crate::controller::CommonController;

pub mod paths;

/// Register the common routes.
///
/// Ping is always unauthenticated; version goes through `hook`.
pub fn common_routes(controller: CommonController, hook: &AuthenticationHook) -> Router {
    Router::new()
        .route(paths::PING, get(ping))
        .route(paths::VERSION, hook.protect(get(version)))
        .with_state(Arc::new(controller))
}

async fn ping(State(controller): State<Arc<CommonController>>, headers: HeaderMap) -> Response {
    controller.ping(&headers)
}

async fn version(State(controller): State<Arc<CommonController>>, headers: HeaderMap) -> Response {
    controller.version(&headers)
}
