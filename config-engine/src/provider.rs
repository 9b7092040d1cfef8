use crate::environment::Variables;
use crate::error::Result;
use crate::types::ServiceConfig;

/// Where to find the configuration provider, resolved once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderInfo {
    service_config: ServiceConfig,
}

impl ProviderInfo {
    /// Resolve provider info from a command-line URL and the environment.
    ///
    /// `EDGEX_CONFIGURATION_PROVIDER` takes precedence over `provider_url`. An
    /// empty `provider_url` with no override yields a provider that is not
    /// used (see [`ProviderInfo::use_provider`]).
    ///
    /// # Errors
    ///
    /// Returns a parse error if the effective URL is malformed.
    pub fn new(env: &Variables, provider_url: &str) -> Result<Self> {
        let mut service_config = ServiceConfig::default();

        if !provider_url.is_empty() {
            service_config.populate_from_url(provider_url)?;
        }

        let service_config = env.override_config_provider_info(service_config)?;

        Ok(Self { service_config })
    }

    /// True when a provider host was resolved
    pub fn use_provider(&self) -> bool {
        !self.service_config.host.is_empty()
    }

    pub fn service_config(&self) -> &ServiceConfig {
        &self.service_config
    }

    /// Copy of this provider info pointing at a different host
    #[must_use]
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        let mut service_config = self.service_config.clone();
        service_config.host = host.into();
        Self { service_config }
    }
}
