// src/logging.rs
//! Tracing setup (feature `logging`)
//!
//! RUST_LOG wins when set; otherwise the filter from the config is used.
//! Safe to call more than once.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

pub fn init(config: &Config) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter_for(config))
        .try_init()
        .ok();
}

fn filter_for(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter))
}
