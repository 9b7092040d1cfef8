use thiserror::Error;

/// Errors raised while bootstrapping a service
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Configuration provider or settings errors
    #[error("Configuration error: {0}")]
    Config(#[from] config_engine::ConfigError),

    /// Authentication hook setup errors
    #[error("Authentication error: {0}")]
    Auth(#[from] auth_gateway::AuthError),

    /// Logging/tracing initialization errors
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] telemetry::TelemetryError),

    /// Service settings could not be loaded
    #[error("Settings error: {0}")]
    Settings(String),

    /// Network communication errors
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}

impl BootstrapError {
    /// Short, stable identifier for the error category, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            BootstrapError::Config(_) => "config",
            BootstrapError::Auth(_) => "auth",
            BootstrapError::Telemetry(_) => "telemetry",
            BootstrapError::Settings(_) => "settings",
            BootstrapError::Network(_) => "network",
            BootstrapError::Server(_) => "server",
        }
    }
}

/// Result type alias for bootstrap operations
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Log a bootstrap error with its category attached
pub fn log_error(context: &str, error: &BootstrapError) {
    tracing::error!(
        context = context,
        kind = error.kind(),
        error = %error,
        "Service bootstrap failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_engine::{ProviderInfo, Variables};

    #[test]
    fn test_config_error_converts() {
        let env = Variables::from_map(std::iter::empty::<(String, String)>());
        let err: BootstrapError = ProviderInfo::new(&env, "Not a url").unwrap_err().into();

        assert_eq!(err.kind(), "config");
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_auth_error_converts() {
        let err: BootstrapError = auth_gateway::AuthError::MissingValidator.into();
        assert_eq!(err.kind(), "auth");
    }
}
