// src/crypto/encrypt.rs
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::consts::IV_LEN;
use crate::error::{CoreError, InputError, Result};
use crate::key_material::KeyMaterial;

use super::key::derive_key;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Encrypt plaintext → `IV || ciphertext` (in-memory)
///
/// A fresh IV is drawn from the OS CSPRNG on every call, so encrypting the
/// same plaintext twice never yields the same envelope.
pub fn encrypt<'k>(plaintext: &[u8], key: impl Into<KeyMaterial<'k>>) -> Result<Vec<u8>> {
    let key = key.into();
    check_inputs(plaintext, key)?;

    let mut iv = [0u8; IV_LEN];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CoreError::EncryptionFailed(format!("IV generation failed: {e}")))?;

    seal(plaintext, key, &iv)
}

/// Encrypt with a caller-chosen IV.
///
/// Only for known-answer vectors and interoperability checks. Reusing an IV
/// under the same key leaks equality of plaintext prefixes; use [`encrypt`]
/// for real data.
pub fn encrypt_with_iv<'k>(
    plaintext: &[u8],
    key: impl Into<KeyMaterial<'k>>,
    iv: &[u8; IV_LEN],
) -> Result<Vec<u8>> {
    let key = key.into();
    check_inputs(plaintext, key)?;
    seal(plaintext, key, iv)
}

fn check_inputs(plaintext: &[u8], key: KeyMaterial<'_>) -> Result<()> {
    if plaintext.is_empty() {
        return Err(InputError::EmptyPlaintext.into());
    }
    if key.is_empty() {
        return Err(InputError::EmptyKeyMaterial.into());
    }
    Ok(())
}

fn seal(plaintext: &[u8], key: KeyMaterial<'_>, iv: &[u8; IV_LEN]) -> Result<Vec<u8>> {
    let derived = derive_key(key)?;
    let engine = Aes256CbcEnc::new_from_slices(derived.expose_secret(), iv)
        .map_err(|e| CoreError::EncryptionFailed(e.to_string()))?;
    let ciphertext = engine.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut envelope = Vec::with_capacity(IV_LEN + ciphertext.len());
    envelope.extend_from_slice(iv);
    envelope.extend_from_slice(&ciphertext);

    #[cfg(feature = "logging")]
    tracing::debug!(
        plaintext_len = plaintext.len(),
        envelope_len = envelope.len(),
        "envelope sealed"
    );

    Ok(envelope)
}
