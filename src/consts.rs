// src/consts.rs
//! Shared constants: fixed cipher parameters and defaults
//!
//! None of the cipher parameters are configurable: changing any of them
//! produces a different envelope format.

/// Algorithm implemented by this crate
pub const ALGORITHM: &str = "AES-256-CBC";

/// Padding scheme applied before encryption
pub const PADDING: &str = "PKCS7";

/// Full algorithm identifier reported by `SymmetricEnvelopeCipher`
pub const ALGORITHM_ID: &str = "AES-256-CBC/PKCS7";

/// AES block size in bytes
pub const BLOCK_LEN: usize = 16;

/// IV length; always the first bytes of an envelope
pub const IV_LEN: usize = 16;

/// Derived AES-256 key length (SHA-256 output)
pub const KEY_LEN: usize = 32;

/// Default config file looked up when `CONFIG_ENV_VAR` is unset
pub const DEFAULT_CONFIG_PATH: &str = "cbc-envelope.toml";

/// Env var naming the config file
pub const CONFIG_ENV_VAR: &str = "CBC_ENVELOPE_CONFIG";

/// Extension appended to encrypted file names
pub const DEFAULT_FILE_EXTENSION: &str = "enc";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
