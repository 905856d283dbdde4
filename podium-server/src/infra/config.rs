//! Runtime configuration gathered from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ALGORITHM_DATA_PATH: &str = "data/leaderboard.json";
pub const DEFAULT_MODEL_DATA_PATH: &str = "data/models.json";
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_TEST_RUN_DIR: &str = "example-lsb/test-run";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid listen address {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

/// Backing files of the two leaderboards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub algorithm_data_path: PathBuf,
    pub model_data_path: PathBuf,
}

/// Where evaluation artifacts are served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsConfig {
    pub results_dir: PathBuf,
    pub test_run_dir: PathBuf,
}

impl ResultsConfig {
    pub fn test_run_path(&self) -> PathBuf {
        self.results_dir.join(&self.test_run_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub results: ResultsConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let path = |key: &str, default: &str| {
            get(key).map_or_else(|| PathBuf::from(default), PathBuf::from)
        };

        let port = match get("SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig {
                host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            data: DataConfig {
                algorithm_data_path: path("ALGORITHM_DATA_PATH", DEFAULT_ALGORITHM_DATA_PATH),
                model_data_path: path("MODEL_DATA_PATH", DEFAULT_MODEL_DATA_PATH),
            },
            results: ResultsConfig {
                results_dir: path("RESULTS_DIR", DEFAULT_RESULTS_DIR),
                test_run_dir: path("TEST_RUN_DIR", DEFAULT_TEST_RUN_DIR),
            },
        })
    }
}
