use std::{net::SocketAddr, time::Duration};
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PRACTICE_STATS_BASE_URL: &str = "https://leetcode-stats-api.herokuapp.com";
pub const DEFAULT_PRACTICE_STATS_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration, read from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub practice_stats_base_url: String,
    pub practice_stats_timeout: Duration,
    /// When unset the service runs against an empty in-memory profile store
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Reads `BIND_ADDR`, `PRACTICE_STATS_BASE_URL`, `PRACTICE_STATS_TIMEOUT_SECS`
    /// and `DATABASE_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_addr_raw.clone(),
            })?;

        let timeout_secs = match get("PRACTICE_STATS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "PRACTICE_STATS_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_PRACTICE_STATS_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            practice_stats_base_url: get("PRACTICE_STATS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PRACTICE_STATS_BASE_URL.to_string()),
            practice_stats_timeout: Duration::from_secs(timeout_secs),
            database_url: get("DATABASE_URL"),
        })
    }
}
