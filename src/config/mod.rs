// src/config/mod.rs
//! Configuration system for cbc-envelope
//!
//! Central, lazy-loaded global config from TOML, path overridable through
//! `CBC_ENVELOPE_CONFIG`. Only transport and logging settings live here;
//! the cipher parameters are fixed.

pub use app::{config_path, load, load_from, Config, EnvelopeSettings, LoggingSettings};

mod app;
mod defaults;
