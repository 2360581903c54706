// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Which call precondition was violated
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("plaintext empty")]
    EmptyPlaintext,

    #[error("key material empty")]
    EmptyKeyMaterial,

    #[error("envelope too short or empty")]
    EnvelopeTooShort,
}

/// `encrypt`/`decrypt` only ever return `InvalidInput`, `EncryptionFailed`
/// or `DecryptionFailed`. The remaining variants belong to the file,
/// encoding and config helpers.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// Deliberately carries nothing: wrong key and tampered data must look the same.
    #[error("decryption failed: wrong key or tampered data")]
    DecryptionFailed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("envelope encoding error: {0}")]
    Encoding(String),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
