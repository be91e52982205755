use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::i18n::is_supported_locale;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub static_config: StaticConfig,
    pub i18n: I18nConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    pub enabled: bool,
    pub web_root: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Bundle used when a request carries no usable locality
    pub default_locale: String,
}

impl Config {
    /// Load configuration with environment variable override support
    ///
    /// Loading order:
    /// 1. Load from the explicit path, or the first config.toml found
    /// 2. Override with environment variables (prefixed with APP_)
    /// 3. Validate the final configuration
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, anyhow::Error> {
        let mut config = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                Self::from_toml(path)?
            },
            None => match Self::find_config_file() {
                Some(path) => Self::from_toml(&path)?,
                None => {
                    tracing::warn!("Configuration file not found, using defaults");
                    Config::default()
                },
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 8000)
    /// - APP_DATABASE_URL: Database URL (default: sqlite://data/storefront.db)
    /// - APP_DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,storefront=debug")
    /// - APP_STATIC_ENABLED: Serve static assets (true/false)
    /// - APP_STATIC_WEB_ROOT: Directory of static assets
    /// - APP_DEFAULT_LOCALE: Fallback localization bundle
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Some(port) = lookup("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Some(db_url) = lookup("APP_DATABASE_URL") {
            self.database.url = db_url;
            tracing::info!("Override database.url from env");
        }

        if let Some(max) = lookup("APP_DATABASE_MAX_CONNECTIONS") {
            match max.parse() {
                Ok(val) => {
                    self.database.max_connections = val;
                    tracing::info!(
                        "Override database.max_connections from env: {}",
                        self.database.max_connections
                    );
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_DATABASE_MAX_CONNECTIONS '{}': {} (keep {})",
                    max,
                    e,
                    self.database.max_connections
                ),
            }
        }

        if let Some(level) = lookup("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Some(enabled) = lookup("APP_STATIC_ENABLED")
            && let Ok(val) = enabled.parse()
        {
            self.static_config.enabled = val;
            tracing::info!("Override static_config.enabled from env: {}", val);
        }

        if let Some(web_root) = lookup("APP_STATIC_WEB_ROOT") {
            self.static_config.web_root = web_root;
            tracing::info!("Override static_config.web_root from env: {}", self.static_config.web_root);
        }

        if let Some(locale) = lookup("APP_DEFAULT_LOCALE") {
            self.i18n.default_locale = locale;
            tracing::info!("Override i18n.default_locale from env: {}", self.i18n.default_locale);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.database.url.is_empty() {
            anyhow::bail!("Database URL cannot be empty");
        }

        if self.database.max_connections == 0 {
            anyhow::bail!("database.max_connections must be > 0");
        }

        if !is_supported_locale(&self.i18n.default_locale) {
            anyhow::bail!(
                "i18n.default_locale '{}' is not a supported locale bundle",
                self.i18n.default_locale
            );
        }

        Ok(())
    }

    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = ["conf/config.toml", "config.toml"];

        possible_paths
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    fn from_toml(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8000 }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: "sqlite://data/storefront.db".to_string(), max_connections: 5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,storefront=debug,tower_http=info".to_string(),
            file: Some("logs/storefront.log".to_string()),
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self { enabled: true, web_root: "public".to_string() }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self { default_locale: "en".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9090

            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.i18n.default_locale, "en");
        assert!(config.static_config.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("APP_SERVER_PORT", "7000"),
            ("APP_DATABASE_URL", "sqlite://tmp/shop.db"),
            ("APP_DATABASE_MAX_CONNECTIONS", "not-a-number"),
            ("APP_STATIC_ENABLED", "false"),
            ("APP_DEFAULT_LOCALE", "es"),
        ]);

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.database.url, "sqlite://tmp/shop.db");
        assert_eq!(config.database.max_connections, 5, "invalid value keeps the default");
        assert!(!config.static_config.enabled);
        assert_eq!(config.i18n.default_locale, "es");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.database.url.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.i18n.default_locale = "tlh".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("does/not/exist.toml")));
        assert!(result.is_err());
    }
}
