use std::fmt;
use std::net::{IpAddr, SocketAddr};

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be an IP address, got {value:?}")]
    InvalidHost { var: &'static str, value: String },
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

// Keeps the password out of logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let port = |key: &'static str, default: u16| match get(key) {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                var: key,
                value: v,
            }),
            None => Ok(default),
        };

        let database = DatabaseConfig {
            host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: port("DB_PORT", 5432)?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            name: required("DB_NAME")?,
        };

        let listen_host = get("LISTEN_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let ip: IpAddr = listen_host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost {
                var: "LISTEN_HOST",
                value: listen_host.clone(),
            })?;
        let listen_addr = SocketAddr::new(ip, port("LISTEN_PORT", 8080)?);

        Ok(Self {
            database,
            listen_addr,
        })
    }
}
