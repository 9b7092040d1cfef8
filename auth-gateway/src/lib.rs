//! Authentication hook for service routes
//!
//! Services register some routes without authentication (health checks) and
//! wrap the rest with an [`AuthenticationHook`]. The hook is picked at startup
//! from the environment: with the secret store disabled it passes requests
//! straight through, otherwise it demands a bearer JWT accepted by a
//! [`TokenValidator`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use auth_gateway::{AuthenticationHook, HmacJwtValidator};
//! use axum::{routing::get, Router};
//!
//! let hook = AuthenticationHook::with_validator(Arc::new(HmacJwtValidator::new(b"secret")));
//!
//! let app: Router = Router::new()
//!     .route("/open", get(|| async { "pong" }))
//!     .route("/protected", hook.protect(get(|| async { "secret" })));
//! ```

pub mod error;
pub mod hook;
pub mod validator;

pub use error::*;
pub use hook::*;
pub use validator::*;
