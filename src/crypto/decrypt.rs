// src/crypto/decrypt.rs
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::envelope::Envelope;
use crate::error::{CoreError, Result};
use crate::key_material::KeyMaterial;

use super::key::derive_key;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt `IV || ciphertext` → plaintext (in-memory)
///
/// Every cryptographic mismatch (wrong key, flipped bits, misaligned
/// ciphertext) maps to the same [`CoreError::DecryptionFailed`].
pub fn decrypt<'k>(envelope: &[u8], key: impl Into<KeyMaterial<'k>>) -> Result<Vec<u8>> {
    let envelope = Envelope::parse(envelope)?;
    let derived = derive_key(key.into())?;
    let plaintext = Aes256CbcDec::new_from_slices(derived.expose_secret(), envelope.iv())
        .map_err(|_| CoreError::DecryptionFailed)?
        .decrypt_padded_vec_mut::<Pkcs7>(envelope.ciphertext())
        .map_err(|_| {
            #[cfg(feature = "logging")]
            tracing::debug!(ciphertext_len = envelope.ciphertext().len(), "envelope rejected");
            CoreError::DecryptionFailed
        })?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        ciphertext_len = envelope.ciphertext().len(),
        plaintext_len = plaintext.len(),
        "envelope opened"
    );

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    #[test]
    fn short_envelope_is_checked_before_key() {
        assert!(matches!(
            decrypt(&[0u8; 16], ""),
            Err(CoreError::InvalidInput(InputError::EnvelopeTooShort))
        ));
    }

    #[test]
    fn misaligned_ciphertext_is_a_decryption_failure() {
        assert!(matches!(
            decrypt(&[0u8; 16 + 7], "k"),
            Err(CoreError::DecryptionFailed)
        ));
    }
}
