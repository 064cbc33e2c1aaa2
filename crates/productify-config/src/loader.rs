//! Configuration loader with layered sources.

use crate::{AppConfig, DEFAULT_JWT_SECRET};
use config::{Config, ConfigError, Environment, File};
use productify_core::ProductifyError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "PRODUCTIFY";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables such as `PRODUCTIFY__SERVER__PORT`
    pub fn new(config_dir: impl Into<String>) -> Result<Self, ProductifyError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, ProductifyError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), ProductifyError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, ProductifyError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var("PRODUCTIFY_ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_productify_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Checks the settings the application cannot start without.
pub fn validate_config(config: &AppConfig) -> Result<(), ProductifyError> {
    if config.app.is_production() && config.security.jwt_secret == DEFAULT_JWT_SECRET {
        warn!("Using default JWT secret in production! This is a security risk.");
    }

    if config.database.url.trim().is_empty() {
        return Err(ProductifyError::Configuration(
            "Database URL is required".to_string(),
        ));
    }

    if config.security.jwt_secret.is_empty() {
        return Err(ProductifyError::Configuration(
            "JWT secret is required".to_string(),
        ));
    }

    if config.database.max_connections == 0
        || config.database.min_connections > config.database.max_connections
    {
        return Err(ProductifyError::Configuration(format!(
            "Invalid pool size: min {} max {}",
            config.database.min_connections, config.database.max_connections
        )));
    }

    Ok(())
}

fn config_error_to_productify_error(err: ConfigError) -> ProductifyError {
    ProductifyError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent").to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.security.admin_username, "admin");
    }

    #[tokio::test]
    async fn test_default_file_and_local_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 7000\n\n[database]\nurl = \"sqlite::memory:\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 7001\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.database.url, "sqlite::memory:");
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        fs::write(&path, "[security]\njwt_expiration_secs = 60\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get().await.security.jwt_expiration_secs, 60);

        fs::write(&path, "[security]\njwt_expiration_secs = 120\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.security.jwt_expiration_secs, 120);
    }

    #[test]
    fn test_validate_rejects_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ProductifyError::Configuration(_)));
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let mut config = AppConfig::default();
        config.security.jwt_secret.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_pool_bounds() {
        let mut config = AppConfig::default();
        config.database.min_connections = 10;
        config.database.max_connections = 2;
        assert!(validate_config(&config).is_err());
        assert!(validate_config(&AppConfig::default()).is_ok());
    }
}
