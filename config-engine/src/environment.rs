//! Environment variable overrides applied during bootstrap

use std::collections::HashMap;

use crate::error::Result;
use crate::types::ServiceConfig;

/// Overrides the configuration provider URL given on the command line
pub const ENV_KEY_CONFIG_PROVIDER: &str = "EDGEX_CONFIGURATION_PROVIDER";

/// Set to `false` to run without the secret store (and without auth)
pub const ENV_KEY_SECURITY_SECRET_STORE: &str = "EDGEX_SECURITY_SECRET_STORE";

/// Snapshot of the environment variables that can override configuration
#[derive(Debug, Clone, Default)]
pub struct Variables {
    variables: HashMap<String, String>,
}

impl Variables {
    /// Capture the current process environment
    pub fn new() -> Self {
        Self::from_map(std::env::vars())
    }

    /// Build from an explicit set of variables instead of the process environment
    pub fn from_map<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            variables: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `key`, treating an empty value as unset
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Replace the provider descriptor with the one named by
    /// `EDGEX_CONFIGURATION_PROVIDER`, if that variable is set.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the override value. The supplied descriptor
    /// is not used as a fallback.
    pub fn override_config_provider_info(
        &self,
        mut config: ServiceConfig,
    ) -> Result<ServiceConfig> {
        if let Some(url) = self.get(ENV_KEY_CONFIG_PROVIDER) {
            log_environment_override("Configuration Provider Information", ENV_KEY_CONFIG_PROVIDER, url);
            config.populate_from_url(url)?;
        }

        Ok(config)
    }

    /// Whether the secret store, and with it request authentication, is enabled
    pub fn is_security_enabled(&self) -> bool {
        self.get(ENV_KEY_SECURITY_SECRET_STORE)
            .map_or(true, |value| !value.eq_ignore_ascii_case("false"))
    }
}

fn log_environment_override(name: &str, key: &str, value: &str) {
    tracing::info!(
        key = key,
        value = value,
        "Variables override of '{}' by environment variable",
        name
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_unset() {
        let env = Variables::from_map([(ENV_KEY_CONFIG_PROVIDER, "")]);
        assert_eq!(env.get(ENV_KEY_CONFIG_PROVIDER), None);
    }

    #[test]
    fn test_override_replaces_descriptor() {
        let env = Variables::from_map([(ENV_KEY_CONFIG_PROVIDER, "consul.https://config-store:8501")]);
        let original: ServiceConfig = "consul.http://localhost:8500".parse().unwrap();

        let overridden = env.override_config_provider_info(original).unwrap();

        assert_eq!(overridden.host, "config-store");
        assert_eq!(overridden.port, 8501);
        assert_eq!(overridden.protocol, "https");
    }

    #[test]
    fn test_no_override_passes_through() {
        let env = Variables::default();
        let original: ServiceConfig = "consul.http://localhost:8500".parse().unwrap();

        let result = env.override_config_provider_info(original.clone()).unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn test_security_toggle() {
        assert!(Variables::default().is_security_enabled());
        assert!(Variables::from_map([(ENV_KEY_SECURITY_SECRET_STORE, "true")]).is_security_enabled());
        assert!(!Variables::from_map([(ENV_KEY_SECURITY_SECRET_STORE, "false")]).is_security_enabled());
        assert!(!Variables::from_map([(ENV_KEY_SECURITY_SECRET_STORE, "FALSE")]).is_security_enabled());
    }
}
