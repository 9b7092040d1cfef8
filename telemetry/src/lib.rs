//! Structured logging for bootstrapped services
//!
//! Installs a `tracing` subscriber with an `EnvFilter` (honouring `RUST_LOG`)
//! and either a human-readable or a JSON formatter, chosen from
//! `BOOTSTRAP_ENV`.
//!
//! # Example
//!
//! ```rust,no_run
//! use telemetry::{init_tracing, LogConfig};
//!
//! init_tracing(&LogConfig::new(["my_service"]).verbose(true)).unwrap();
//! tracing::info!("service starting");
//! ```

pub mod error;
pub mod logging;

pub use error::*;
pub use logging::*;
