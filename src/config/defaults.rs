// src/config/defaults.rs
use crate::config::app::{EnvelopeSettings, LoggingSettings};
use crate::consts::{DEFAULT_FILE_EXTENSION, DEFAULT_LOG_FILTER};
use crate::encoding::EnvelopeEncoding;

pub fn default_envelope() -> EnvelopeSettings {
    EnvelopeSettings {
        encoding: EnvelopeEncoding::default(),
        file_extension: default_file_extension(),
    }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_log_filter(),
    }
}

pub fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.into()
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}
