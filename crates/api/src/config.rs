//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// Default wall-clock budget per chat request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Wall-clock budget for one chat request.
    pub request_timeout: Duration,
    /// Catalog file; the embedded seed is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CONCIERGE_ADDR` | Server bind address | `127.0.0.1:8787` |
    /// | `CONCIERGE_REQUEST_TIMEOUT_SECS` | Per-request budget in seconds | `60` |
    /// | `CATALOG_PATH` | Catalog JSON file | embedded seed |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("CONCIERGE_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let request_timeout = match env::var("CONCIERGE_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let catalog_path = env::var("CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr,
            request_timeout,
            catalog_path,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CONCIERGE_ADDR format")]
    InvalidAddr,

    #[error("Invalid CONCIERGE_REQUEST_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-based scenarios share one test because env vars are
    // process-global and tests run in parallel.
    #[test]
    fn test_from_env() {
        env::remove_var("CONCIERGE_ADDR");
        env::remove_var("CONCIERGE_REQUEST_TIMEOUT_SECS");
        env::remove_var("CATALOG_PATH");

        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.to_string(), DEFAULT_ADDR);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert!(config.catalog_path.is_none());

        env::set_var("CONCIERGE_ADDR", "0.0.0.0:9000");
        env::set_var("CONCIERGE_REQUEST_TIMEOUT_SECS", "15");
        env::set_var("CATALOG_PATH", "/tmp/catalog.json");
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));

        env::set_var("CONCIERGE_REQUEST_TIMEOUT_SECS", "0");
        assert!(matches!(Config::from_env(), Err(ConfigError::InvalidTimeout(_))));

        env::set_var("CONCIERGE_REQUEST_TIMEOUT_SECS", "15");
        env::set_var("CONCIERGE_ADDR", "not an address");
        assert!(matches!(Config::from_env(), Err(ConfigError::InvalidAddr)));

        env::remove_var("CONCIERGE_ADDR");
        env::remove_var("CONCIERGE_REQUEST_TIMEOUT_SECS");
        env::remove_var("CATALOG_PATH");
    }
}
