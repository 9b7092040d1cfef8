use tracing::Level;
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::error::{Result, TelemetryError};

/// Selects production logging when set to `production`
pub const ENV_KEY_RUNTIME_ENV: &str = "BOOTSTRAP_ENV";

/// Output format of the log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, coloured when attached to a terminal
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Pick the format from a runtime environment name
    pub fn for_environment(runtime_env: Option<&str>) -> Self {
        match runtime_env {
            Some(env) if env.eq_ignore_ascii_case("production") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::for_environment(std::env::var(ENV_KEY_RUNTIME_ENV).ok().as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Crate targets that get the service log level when `RUST_LOG` is unset
    pub targets: Vec<String>,
    pub verbose: bool,
    pub format: LogFormat,
}

impl LogConfig {
    pub fn new(targets: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            verbose: false,
            format: LogFormat::from_env(),
        }
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Filter directives used when `RUST_LOG` is not set
    pub fn default_directives(&self) -> String {
        let level = self.level();
        self.targets
            .iter()
            .map(|target| format!("{}={}", target.replace('-', "_"), level))
            .chain(["tower_http=info".to_string(), "hyper=info".to_string()])
            .collect::<Vec<_>>()
            .join(",")
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(self.default_directives())
                .map_err(|e| TelemetryError::FilterError(e.to_string())),
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if the filter directives are invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let env_filter = config.env_filter()?;

    let result = match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_level(true),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .try_init(),
    };

    result.map_err(|e| TelemetryError::TracingError(e.to_string()))
}
