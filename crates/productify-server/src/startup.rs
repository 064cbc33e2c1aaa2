//! Server startup utilities.

use anyhow::Context;
use productify_config::ObservabilityConfig;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `observability.log_level` when set.
pub fn init_logging(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
            .context("Failed to install JSON log subscriber")?;
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .try_init()
            .context("Failed to install log subscriber")?;
    }

    Ok(())
}

fn build_filter(config: &ObservabilityConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log level: {}", config.log_level)),
    }
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Categories: http://{}/api/category", addr);
    info!("Products:   http://{}/api/product", addr);
    info!("Login:      http://{}/auth/login", addr);
    info!("Health:     http://{}/health", addr);
    info!("{}", separator);
}
