// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Whole-file helpers on top of the in-memory primitives in `crypto`. The
//! output is written in the configured transport encoding.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::crypto::{decrypt, encrypt};
use crate::encoding::EnvelopeEncoding;
use crate::error::Result;
use crate::key_material::KeyMaterial;

/// Encrypt a file on disk, writing the envelope in the configured encoding.
///
/// Returns the plaintext size in bytes.
pub fn encrypt_file<'k, P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    key: impl Into<KeyMaterial<'k>>,
) -> Result<u64> {
    encrypt_file_as(input_path, output_path, key, config::load().envelope.encoding)
}

/// Decrypt an envelope file stored in the configured encoding.
///
/// Returns the plaintext size in bytes.
pub fn decrypt_file<'k, P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    key: impl Into<KeyMaterial<'k>>,
) -> Result<u64> {
    decrypt_file_as(input_path, output_path, key, config::load().envelope.encoding)
}

pub fn encrypt_file_as<'k, P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    key: impl Into<KeyMaterial<'k>>,
    encoding: EnvelopeEncoding,
) -> Result<u64> {
    let plaintext = std::fs::read(input_path.as_ref())?;
    let envelope = encrypt(&plaintext, key)?;
    write_atomic(output_path.as_ref(), &encoding.encode(&envelope))?;

    #[cfg(feature = "logging")]
    tracing::info!(
        output = %output_path.as_ref().display(),
        ?encoding,
        plaintext_len = plaintext.len(),
        "file encrypted"
    );

    Ok(plaintext.len() as u64)
}

pub fn decrypt_file_as<'k, P: AsRef<Path>>(
    input_path: P,
    output_path: P,
    key: impl Into<KeyMaterial<'k>>,
    encoding: EnvelopeEncoding,
) -> Result<u64> {
    let stored = std::fs::read(input_path.as_ref())?;
    let envelope = encoding.decode(&stored)?;
    let plaintext = decrypt(&envelope, key)?;
    write_atomic(output_path.as_ref(), &plaintext)?;

    #[cfg(feature = "logging")]
    tracing::info!(
        output = %output_path.as_ref().display(),
        plaintext_len = plaintext.len(),
        "file decrypted"
    );

    Ok(plaintext.len() as u64)
}

/// Write through a temp file in the destination directory, then rename it
/// into place: the destination is either untouched or complete.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".cbc-envelope-")
        .tempfile_in(dir)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// `report.pdf` → `report.pdf.enc` (extension taken from the config)
pub fn encrypted_path_for<P: AsRef<Path>>(path: P, config: &Config) -> PathBuf {
    let mut name = OsString::from(path.as_ref().as_os_str());
    name.push(".");
    name.push(&config.envelope.file_extension);
    PathBuf::from(name)
}
