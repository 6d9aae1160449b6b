//! Tracing subscriber setup
//!
//! Production deployments emit JSON lines; everything else gets ANSI output.
//! `LOG_FORMAT` (`json` or `pretty`) overrides the environment default and
//! `RUST_LOG` overrides the `info` filter.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::{get_environment, is_production};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn for_environment(environment: &str) -> Self {
        if is_production(environment) {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// `LOG_FORMAT` when it parses, otherwise the environment default
    pub fn resolve(override_value: Option<&str>, environment: &str) -> Self {
        override_value
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| Self::for_environment(environment))
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stdout);

        match self {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Pretty => base.with_ansi(true).boxed(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown log format: {0}")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Install the global subscriber; later calls leave the first one in place
pub fn init_logging() {
    let environment = get_environment();
    let format = LogFormat::resolve(env::var("LOG_FORMAT").ok().as_deref(), &environment);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(format.layer())
        .with(filter)
        .try_init();

    match result {
        Ok(()) => tracing::debug!(environment = %environment, format = ?format, "Logging initialized"),
        Err(e) => tracing::debug!(error = %e, "Logging already initialized"),
    }
}
