//! Common error handling utilities for the service bootstrap crates
//!
//! Each library crate owns a narrow error enum (`ConfigError`, `AuthError`,
//! `TelemetryError`). Binaries that wire those crates together at startup
//! work with [`BootstrapError`], which wraps them and adds the failures that
//! only show up while bringing a service online (binding, serving, settings).
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::{ProviderInfo, Variables};
//! use error_common::Result;
//!
//! fn load_provider() -> Result<ProviderInfo> {
//!     let env = Variables::new();
//!     Ok(ProviderInfo::new(&env, "consul.http://localhost:8500")?)
//! }
//! ```

pub mod types;

pub use types::*;
