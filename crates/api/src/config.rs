//! Process configuration, read from the environment once at startup and
//! passed down explicitly.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use fleet_rental::DEFAULT_AGENCY_NAME;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_FILE: &str = "data/cars.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FLEET_BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_file: PathBuf,
    pub agency_name: String,
}

impl AppConfig {
    /// Read `FLEET_BIND_ADDR`, `FLEET_DATA_FILE` and `FLEET_AGENCY_NAME`, falling
    /// back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("FLEET_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_raw.clone()))?;

        let data_file = lookup("FLEET_DATA_FILE").unwrap_or_else(|| {
            tracing::debug!("FLEET_DATA_FILE not set; using {DEFAULT_DATA_FILE}");
            DEFAULT_DATA_FILE.to_string()
        });

        Ok(Self {
            bind_addr,
            data_file: PathBuf::from(data_file),
            agency_name: lookup("FLEET_AGENCY_NAME")
                .unwrap_or_else(|| DEFAULT_AGENCY_NAME.to_string()),
        })
    }

    /// Config for a given data file with default name/address (tests, embedding).
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr: ([127, 0, 0, 1], 0).into(),
            data_file: data_file.into(),
            agency_name: DEFAULT_AGENCY_NAME.to_string(),
        }
    }
}
