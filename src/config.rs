//! Environment-driven settings.
//!
//! - `HOST`: bind address (default `127.0.0.1`)
//! - `PORT`: bind port (default `8000`)
//! - `STATIC_DIR`: directory served under `/static` (default `static`)
//! - `ACTIVITIES_SEED_PATH`: JSON seed replacing the embedded one

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("cannot parse bind address {0:?}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let static_dir = non_empty("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let seed_path = non_empty("ACTIVITIES_SEED_PATH").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            static_dir,
            seed_path,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_for_port(self.port)
    }

    /// Address tried when the configured port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_for_port(self.port.wrapping_add(1))
    }

    fn addr_for_port(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.seed_path, None);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8000");
        assert_eq!(config.fallback_addr().unwrap().port(), 8001);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("STATIC_DIR", "/srv/static"),
            ("ACTIVITIES_SEED_PATH", "/etc/activities.json"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:9090");
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.seed_path, Some(PathBuf::from("/etc/activities.json")));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", " "), ("ACTIVITIES_SEED_PATH", "")]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.seed_path, None);
    }

    #[test]
    fn unparsable_port_is_an_error() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
    }

    #[test]
    fn bad_host_surfaces_at_address_time() {
        let config = config_from(&[("HOST", "not a host")]).unwrap();
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}
