// src/cipher.rs
//! `SymmetricEnvelopeCipher`: the object-style entry point
//!
//! Zero-sized and stateless: every call is independent, and the value can be
//! copied or shared across threads freely.

use crate::consts::{ALGORITHM_ID, IV_LEN};
use crate::crypto;
use crate::error::Result;
use crate::key_material::KeyMaterial;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymmetricEnvelopeCipher;

impl SymmetricEnvelopeCipher {
    pub const fn new() -> Self {
        Self
    }

    /// `"AES-256-CBC/PKCS7"`
    pub const fn algorithm(&self) -> &'static str {
        ALGORITHM_ID
    }

    pub const fn iv_len(&self) -> usize {
        IV_LEN
    }

    /// See [`crypto::encrypt`].
    pub fn encrypt<'k>(
        &self,
        plaintext: &[u8],
        key: impl Into<KeyMaterial<'k>>,
    ) -> Result<Vec<u8>> {
        crypto::encrypt(plaintext, key)
    }

    /// See [`crypto::decrypt`].
    pub fn decrypt<'k>(
        &self,
        envelope: &[u8],
        key: impl Into<KeyMaterial<'k>>,
    ) -> Result<Vec<u8>> {
        crypto::decrypt(envelope, key)
    }
}
