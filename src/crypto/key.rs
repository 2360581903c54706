// src/crypto/key.rs
//! Key derivation: one unsalted SHA-256 pass over the key material bytes.
//!
//! Interoperating envelopes depend on this exact rule, so there is no salt
//! and no iteration count. Low-entropy key material is guessable offline.

use sha2::{Digest, Sha256};

use crate::aliases::DerivedKey32;
use crate::error::{InputError, Result};
use crate::key_material::KeyMaterial;

pub(crate) fn derive_key(material: KeyMaterial<'_>) -> Result<DerivedKey32> {
    if material.is_empty() {
        return Err(InputError::EmptyKeyMaterial.into());
    }
    let digest: [u8; 32] = Sha256::digest(material.as_bytes()).into();
    Ok(DerivedKey32::new(digest))
}
