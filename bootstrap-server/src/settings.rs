//! Service settings layered from defaults, an optional file and the environment

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Prefix of environment overrides, e.g. `BOOTSTRAP__SERVICE__NAME`
pub const ENV_PREFIX: &str = "BOOTSTRAP";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceSettings {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub sdk_version: Option<String>,
    /// Shared secret for validating bearer tokens on protected routes
    #[serde(default)]
    pub jwt_secret: Option<String>,
    #[serde(default)]
    pub jwt_issuer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub service: ServiceSettings,
}

impl Settings {
    /// Load settings. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be parsed or a value has
    /// the wrong type.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("service.name", env!("CARGO_PKG_NAME"))?
            .set_default("service.version", env!("CARGO_PKG_VERSION"))?;

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.service.name, "bootstrap-server");
        assert_eq!(settings.service.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(settings.service.sdk_version, None);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let settings = Settings::load(Some("/nonexistent/bootstrap-settings")).unwrap();
        assert_eq!(settings.service.name, "bootstrap-server");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let path = std::env::temp_dir().join(format!("bootstrap-settings-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[service]\nname = \"core-data\"\nversion = \"3.1.0\"\nsdk_version = \"3.0.2\"\n",
        )
        .unwrap();

        let settings = Settings::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.service.name, "core-data");
        assert_eq!(settings.service.version, "3.1.0");
        assert_eq!(settings.service.sdk_version.as_deref(), Some("3.0.2"));
        assert_eq!(settings.service.jwt_secret, None);
    }
}
