//! Bootstrap server - common REST endpoints for every service
//!
//! This library provides the routes each bootstrapped service exposes
//! regardless of its business logic: an unauthenticated ping for health
//! checks and an authenticated version report.

pub mod controller;
pub mod dto;
pub mod middleware;
pub mod routes;
pub mod settings;

// Re-export commonly used types
pub use controller::CommonController;
pub use routes::common_routes;
pub use settings::Settings;

use auth_gateway::AuthenticationHook;
use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the application router with the common routes and middleware
pub fn create_app(controller: CommonController, hook: &AuthenticationHook) -> Router {
    routes::common_routes(controller, hook).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(middleware::request_timing_middleware)),
    )
}
