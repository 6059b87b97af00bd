/// Configuration for the HTTP front end
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid listen address {address}:{port}")]
    InvalidAddress { address: String, port: u16 },
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7878
}

impl ServerConfig {
    /// Loads the configuration from a JSON file. Missing fields fall back to
    /// their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.address, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                address: self.address.clone(),
                port: self.port,
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{ "port": 9000 }"#).unwrap();
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
    }

    #[test]
    fn test_load_from_file() {
        let file_name = format!("study-buddy-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, r#"{ "address": "0.0.0.0", "port": 8080 }"#).unwrap();

        let config = ServerConfig::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            config,
            ServerConfig {
                address: "0.0.0.0".to_string(),
                port: 8080
            }
        );
    }

    #[test]
    fn test_missing_file_and_bad_address() {
        let err = ServerConfig::load_from_file(Path::new("/nonexistent/study-buddy.json"));
        assert!(matches!(err, Err(ConfigError::Io { .. })));

        let config = ServerConfig {
            address: "not an address".to_string(),
            port: 1,
        };
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }
}
