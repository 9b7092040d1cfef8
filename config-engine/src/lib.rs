//! Configuration provider discovery for service bootstrap
//!
//! A service learns where its configuration provider lives from a URL given
//! on the command line, optionally overridden by the
//! `EDGEX_CONFIGURATION_PROVIDER` environment variable. The URL scheme
//! carries both the provider type and the wire protocol:
//!
//! ```text
//! consul.http://localhost:8500
//! ^^^^^^ ^^^^   ^^^^^^^^^ ^^^^
//! type   proto  host      port
//! ```
//!
//! # Example
//!
//! ```rust
//! use config_engine::{ProviderInfo, Variables};
//!
//! let env = Variables::from_map([("EDGEX_CONFIGURATION_PROVIDER", "consul.https://config:8501")]);
//! let info = ProviderInfo::new(&env, "consul.http://localhost:8500").unwrap();
//!
//! assert_eq!(info.service_config().host, "config");
//! assert_eq!(info.service_config().url(), "https://config:8501");
//! ```

pub mod environment;
pub mod error;
pub mod provider;
pub mod types;

pub use environment::*;
pub use error::*;
pub use provider::*;
pub use types::*;
