//! Server settings. Defaults reproduce the fixed deployment (port 3001, `./apis`);
//! each can be overridden from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ENV: &str = "FAKE_API_BIND";
pub const DIR_ENV: &str = "FAKE_API_DIR";
pub const BODY_LIMIT_ENV: &str = "FAKE_API_BODY_LIMIT";

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_APIS_DIR: &str = "apis";
/// Largest accepted request body in bytes.
pub const DEFAULT_BODY_LIMIT: usize = 100 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub apis_dir: PathBuf,
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            apis_dir: PathBuf::from(DEFAULT_APIS_DIR),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `FAKE_API_BIND`, `FAKE_API_DIR` and `FAKE_API_BODY_LIMIT` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = ServerConfig::default();
        if let Some(v) = lookup(BIND_ENV).filter(|v| !v.trim().is_empty()) {
            config.bind_addr = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: BIND_ENV,
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.apis_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup(BODY_LIMIT_ENV).filter(|v| !v.trim().is_empty()) {
            config.body_limit = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: BODY_LIMIT_ENV,
                value: v.clone(),
            })?;
        }
        Ok(config)
    }
}
