use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use auth_gateway::{AuthenticationHook, HmacJwtValidator, TokenValidator};
use bootstrap_server::{create_app, routes::paths, CommonController, Settings};
use config_engine::{ProviderInfo, Variables};
use error_common::{log_error, BootstrapError, Result};
use telemetry::{init_tracing, LogConfig};

/// Used when `--config-provider` is given without a value
const DEFAULT_CONFIG_PROVIDER_URL: &str = "consul.http://localhost:8500";

/// Service bootstrap HTTP server
#[derive(Parser, Debug)]
#[command(name = "bootstrap-server")]
#[command(about = "Serves the common ping/version endpoints of a bootstrapped service")]
struct Args {
    /// Configuration provider URL, e.g. consul.http://localhost:8500
    #[arg(
        short = 'p',
        long,
        num_args = 0..=1,
        default_missing_value = DEFAULT_CONFIG_PROVIDER_URL
    )]
    config_provider: Option<String>,

    /// Settings file path
    #[arg(short, long)]
    config: Option<String>,

    /// Server bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, default_value = "59880")]
    port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(
        &LogConfig::new(["bootstrap_server", "config_engine", "auth_gateway"]).verbose(args.verbose),
    )?;

    if let Err(e) = run(args).await {
        log_error("startup", &e);
        return Err(e);
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let settings =
        Settings::load(args.config.as_deref()).map_err(|e| BootstrapError::Settings(e.to_string()))?;
    let env = Variables::new();

    let provider = ProviderInfo::new(&env, args.config_provider.as_deref().unwrap_or_default())?;
    if provider.use_provider() {
        info!(provider = %provider.service_config(), "Using configuration provider");
    } else {
        info!("No configuration provider specified, using local settings only");
    }

    let validator = settings.service.jwt_secret.as_deref().map(|secret| {
        let mut validator = HmacJwtValidator::new(secret.as_bytes());
        if let Some(issuer) = settings.service.jwt_issuer.as_deref() {
            validator = validator.with_issuer(issuer);
        }
        Arc::new(validator) as Arc<dyn TokenValidator>
    });
    let hook = AuthenticationHook::auto_config(&env, validator)?;

    let mut controller = CommonController::new(settings.service.name.as_str());
    controller.set_version(&settings.service.version, settings.service.sdk_version.as_deref());

    let app = create_app(controller, &hook);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| BootstrapError::Network(format!("Failed to bind to {addr}: {e}")))?;

    info!(
        service = %settings.service.name,
        version = %settings.service.version,
        authentication = hook.is_enabled(),
        "Service listening on http://{}{}",
        addr,
        paths::API_BASE
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| BootstrapError::Server(format!("HTTP server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
