//! Runtime configuration read from the environment.
//!
//! Every setting has a default; a variable that is set but does not parse is
//! a startup error rather than a silent fallback.

use crate::store::IN_MEMORY;
use log::info;
use std::{env, fmt::Display, str::FromStr};
use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "debug,actix_web=info,actix_server=info";

const HOST: &str = "ICE_CREAM_HOST";
const PORT: &str = "ICE_CREAM_PORT";
const DATABASE: &str = "ICE_CREAM_DATABASE";
const FORECAST_DAYS: &str = "ICE_CREAM_FORECAST_DAYS";
const JSON_LIMIT: &str = "ICE_CREAM_JSON_LIMIT";

/// One year of daily forecasts.
pub const MAX_FORECAST_DAYS: usize = 365;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("{key} must be at least {min}")]
    BelowMinimum { key: &'static str, min: usize },
    #[error("{key} must be at most {max}")]
    AboveMaximum { key: &'static str, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file for the catalog store, or `:memory:` (the default).
    pub database: String,
    /// Days returned by `GET /weatherforecast`.
    pub forecast_days: usize,
    /// Largest accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database: IN_MEMORY.to_string(),
            forecast_days: 5,
            json_limit: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            host: try_load(&lookup, HOST, defaults.host)?,
            port: try_load(&lookup, PORT, defaults.port)?,
            database: try_load(&lookup, DATABASE, defaults.database)?,
            forecast_days: try_load(&lookup, FORECAST_DAYS, defaults.forecast_days)?,
            json_limit: try_load(&lookup, JSON_LIMIT, defaults.json_limit)?,
        };

        if config.forecast_days == 0 {
            return Err(ConfigError::BelowMinimum {
                key: FORECAST_DAYS,
                min: 1,
            });
        }
        if config.forecast_days > MAX_FORECAST_DAYS {
            return Err(ConfigError::AboveMaximum {
                key: FORECAST_DAYS,
                max: MAX_FORECAST_DAYS,
            });
        }

        Ok(config)
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                value,
                reason: e.to_string(),
            })
        }
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
