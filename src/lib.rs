//! Technical analysis engine for single-instrument price histories.
//!
//! [`analysis::analyze_stock`] turns an ordered price series into moving
//! averages, RSI, trend, support/resistance, trading signals and a
//! recommendation. The remaining modules supply the simulated market data,
//! configuration, logging, metrics and the HTTP surface around it.

pub mod analysis;
pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
