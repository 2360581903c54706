// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Generated keys are plain 32-byte key material: they still go through the
//! SHA-256 derivation like any other key material.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::aliases::{RandomBytes32, RandomKey32, SecureConversionsExt, SecureRandomExt};

/// Generate 256 bits of fresh key material from the OS CSPRNG
#[inline]
pub fn generate_key() -> RandomKey32 {
    RandomKey32::new(**RandomBytes32::new())
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &RandomKey32) -> KeyRepr {
    KeyRepr {
        hex: key.expose_secret().to_hex(),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}
