//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use std::sync::Arc;
use todo_core::TodoError;
use tokio::sync::RwLock;
use tracing::{debug, info};

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
    /// 3. `config/local.toml` - Local overrides (not committed)
    /// 4. Environment variables with `TODO__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, TodoError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, TodoError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), TodoError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, TodoError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("TODO_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        // 1. Load default configuration
        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        // 2. Load environment-specific configuration
        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        // 3. Load local overrides (not committed to version control)
        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        // 4. Override with environment variables (TODO__ prefix)
        builder = builder.add_source(
            Environment::with_prefix("TODO")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_todo_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_todo_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), TodoError> {
        if config.database.url.is_empty() {
            return Err(TodoError::configuration("database URL is required"));
        }

        if config.database.max_connections == 0 {
            return Err(TodoError::configuration(
                "database max_connections must be at least 1",
            ));
        }

        Ok(())
    }
}

fn config_error_to_todo_error(err: ConfigError) -> TodoError {
    TodoError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_missing_directory_uses_defaults() {
        let loader = ConfigLoader::new("./does-not-exist").expect("Failed to create loader");
        let config = loader.get().await;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.app.environment, "development");
    }

    #[tokio::test]
    async fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 3000\n\n[database]\nurl = \"postgres://localhost/todos_test\""
        )
        .expect("Failed to write config file");

        let loader = ConfigLoader::new(dir.path().to_str().unwrap().to_string())
            .expect("Failed to create loader");
        let config = loader.get().await;
        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.database.url, "postgres://localhost/todos_test");
    }

    #[tokio::test]
    async fn test_empty_database_url_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).expect("Failed to create config file");
        writeln!(file, "[database]\nurl = \"\"").expect("Failed to write config file");

        let result = ConfigLoader::new(dir.path().to_str().unwrap().to_string());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("default.toml");
        std::fs::write(&path, "[server]\nport = 3000\n").expect("Failed to write config file");

        let loader = ConfigLoader::new(dir.path().to_str().unwrap().to_string())
            .expect("Failed to create loader");
        assert_eq!(loader.get().await.server.port, 3000);

        std::fs::write(&path, "[server]\nport = 4000\n").expect("Failed to write config file");
        loader.reload().await.expect("Failed to reload");
        assert_eq!(loader.get().await.server.port, 4000);
    }
}
