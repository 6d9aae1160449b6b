//! Runtime configuration loaded from the environment

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Timeframe;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEFRAME: Timeframe = Timeframe::ThreeMonths;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Deployment environment name (`ENVIRONMENT`, default `sandbox`)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub default_timeframe: Timeframe,
    /// Fixes the simulated market data for reproducible runs
    pub simulation_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_timeframe: DEFAULT_TIMEFRAME,
            simulation_seed: None,
        }
    }
}

impl AppConfig {
    /// Read `PORT`, `DEFAULT_TIMEFRAME` and `SIMULATION_SEED`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            default_timeframe: parse_var(&lookup, "DEFAULT_TIMEFRAME")?
                .unwrap_or(defaults.default_timeframe),
            simulation_seed: parse_var(&lookup, "SIMULATION_SEED")?,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        _ => Ok(None),
    }
}
