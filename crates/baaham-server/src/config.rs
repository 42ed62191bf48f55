//! Process configuration.
//!
//! Layered with figment, later sources overriding earlier ones:
//! built-in defaults, then an optional TOML file (`baaham.toml`, or the
//! path in `BAAHAM_CONFIG`), then `BAAHAM_`-prefixed environment
//! variables with `__` separating nested keys (`BAAHAM_JWT__SECRET`).

use std::net::SocketAddr;
use std::path::Path;

use baaham_auth::config::AuthConfig;
use baaham_auth::error::AuthError;
use baaham_auth::password::Argon2Hasher;
use baaham_db::DbConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PREFIX: &str = "BAAHAM_";
pub const CONFIG_PATH_ENV: &str = "BAAHAM_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "baaham.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),

    #[error("missing required config value: {0}")]
    Missing(&'static str),

    #[error("invalid server address: {0}")]
    Address(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `development` or `production`; selects the log format.
    pub app_env: String,
    pub server: ServerConfig,
    pub database: DbConfig,
    pub jwt: JwtConfig,
    pub hasher: HasherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// HMAC signing secret. Required by the server.
    pub secret: String,
}

/// Argon2id cost parameters for newly created hashes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub pepper: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_env: "development".into(),
            server: ServerConfig::default(),
            database: DbConfig::default(),
            jwt: JwtConfig::default(),
            hasher: HasherConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl Default for HasherConfig {
    fn default() -> Self {
        // OWASP ASVS recommended: m=19456 (19 MiB), t=2, p=1
        Self {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
            pepper: None,
        }
    }
}

impl AppConfig {
    /// Load from the default file location and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_figment(Self::figment(path))
    }

    pub fn figment(config_file: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    /// Checks the values only the HTTP server needs.
    pub fn validate_for_server(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Missing("jwt.secret"));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| ConfigError::Address(addr))
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::new(self.jwt.secret.as_bytes())
    }

    pub fn hasher(&self) -> Result<Argon2Hasher, AuthError> {
        Argon2Hasher::with_costs(
            self.hasher.memory_kib,
            self.hasher.iterations,
            self.hasher.parallelism,
            self.hasher.pepper.clone(),
        )
    }
}
