// src/crypto/rotate.rs
use crate::aliases::{PlainText, RandomKey32};
use crate::error::Result;
use crate::key_material::KeyMaterial;
use crate::key_ops::generate_key;

use super::{decrypt, encrypt};

/// Pure in-memory key rotation: old key material → new key material
///
/// The new envelope always gets a fresh IV. A wrong `old_key` fails with
/// `DecryptionFailed` before anything is re-encrypted.
pub fn rotate_key<'o, 'n>(
    envelope: &[u8],
    old_key: impl Into<KeyMaterial<'o>>,
    new_key: impl Into<KeyMaterial<'n>>,
) -> Result<Vec<u8>> {
    let plaintext = PlainText::new(decrypt(envelope, old_key)?);
    encrypt(plaintext.expose_secret(), new_key)
}

/// Rotate onto freshly generated key material, returned to the caller
pub fn rotate_to_random_key<'o>(
    envelope: &[u8],
    old_key: impl Into<KeyMaterial<'o>>,
) -> Result<(Vec<u8>, RandomKey32)> {
    let plaintext = PlainText::new(decrypt(envelope, old_key)?);
    let new_key = generate_key();
    let new_envelope = encrypt(plaintext.expose_secret(), new_key.expose_secret())?;
    Ok((new_envelope, new_key))
}
