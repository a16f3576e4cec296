//! Configuration module
//!
//! `AppConfig` is read from TOML at `$CAMPUS_MATCH_CONFIG` or
//! `~/.config/campus-match/config.toml`. A missing file is created with
//! defaults. `DATABASE_URL` and `JWT_SECRET` override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DiscoverySettings;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::DatabaseConfig;
use crate::shared::InfraError;

pub const CONFIG_ENV: &str = "CAMPUS_MATCH_CONFIG";

/// Default config location: `<config dir>/campus-match/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campus-match")
        .join("config.toml")
}

/// Config path from `$CAMPUS_MATCH_CONFIG`, falling back to the default
pub fn resolve_config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub security: SecuritySection,
    #[serde(default)]
    pub discovery: DiscoverySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./campus-match.db?mode=rwc".to_string(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// `tracing` filter directive, e.g. `info` or `campus_match=debug`
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySection {
    /// Shared HS256 secret of the auth service
    pub jwt_secret: String,
    pub jwt_issuer: String,
}

impl Default for SecuritySection {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            jwt_issuer: jwt.issuer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySection {
    pub fallback_threshold: u32,
    pub default_limit: u32,
    pub quick_limit: u32,
}

impl Default for DiscoverySection {
    fn default() -> Self {
        let d = DiscoverySettings::default();
        Self {
            fallback_threshold: d.fallback_threshold,
            default_limit: d.default_limit,
            quick_limit: d.quick_limit,
        }
    }
}

impl AppConfig {
    /// Load from `path`, writing defaults there first if it does not exist.
    /// Environment overrides are applied on top.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            let config = AppConfig::default();
            config.save(path)?;
            config
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), InfraError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.security.jwt_secret = secret;
        }
    }

    fn validate(&self) -> Result<(), InfraError> {
        let d = &self.discovery;
        if d.default_limit == 0 || d.default_limit > 50 {
            return Err(InfraError::Config(
                "discovery.default_limit must be between 1 and 50".into(),
            ));
        }
        if d.quick_limit == 0 || d.quick_limit > 50 {
            return Err(InfraError::Config(
                "discovery.quick_limit must be between 1 and 50".into(),
            ));
        }
        if self.security.jwt_secret.is_empty() {
            return Err(InfraError::Config("security.jwt_secret must be set".into()));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database.url.clone(),
            max_connections: self.database.max_connections,
        }
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.security.jwt_secret.clone(),
            issuer: self.security.jwt_issuer.clone(),
        }
    }

    pub fn discovery_settings(&self) -> DiscoverySettings {
        DiscoverySettings {
            fallback_threshold: self.discovery.fallback_threshold,
            default_limit: self.discovery.default_limit,
            quick_limit: self.discovery.quick_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("campus-match-test-{}-{}", name, uuid::Uuid::new_v4()))
            .join("config.toml")
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = temp_config_path("defaults");
        let config = AppConfig::load(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.discovery.fallback_threshold, 5);
        assert_eq!(config.discovery.default_limit, 20);
        assert_eq!(config.discovery.quick_limit, 5);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn partial_file_fills_remaining_sections() {
        let path = temp_config_path("partial");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "[server]\nhost = \"127.0.0.1\"\nport = 9090\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.discovery_settings().quick_limit, 5);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn out_of_range_discovery_limit_is_rejected() {
        let path = temp_config_path("invalid");
        let mut config = AppConfig::default();
        config.discovery.default_limit = 80;
        config.save(&path).unwrap();

        assert!(matches!(AppConfig::load(&path), Err(InfraError::Config(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
