// src/envelope.rs
//! Envelope layout: `IV (16 bytes) || ciphertext (N bytes, N % 16 == 0)`
//!
//! There is no magic number, version byte or algorithm tag. The only
//! structure is the fixed-size IV prefix.

use crate::consts::{BLOCK_LEN, IV_LEN};
use crate::error::{InputError, Result};

/// Borrowed view over the two regions of an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    iv: &'a [u8; IV_LEN],
    ciphertext: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Split raw envelope bytes into IV and ciphertext.
    ///
    /// Only the length precondition is checked here; block alignment is left
    /// to the padding check so a misaligned envelope fails like any other
    /// tampered one.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        match bytes.split_first_chunk::<IV_LEN>() {
            Some((iv, ciphertext)) if !ciphertext.is_empty() => Ok(Self { iv, ciphertext }),
            _ => Err(InputError::EnvelopeTooShort.into()),
        }
    }

    pub fn iv(&self) -> &'a [u8; IV_LEN] {
        self.iv
    }

    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }
}

/// Envelope length for a plaintext of `plaintext_len` bytes.
///
/// PKCS7 always pads, so a block-aligned plaintext gains a full extra block.
pub const fn sealed_len(plaintext_len: usize) -> usize {
    IV_LEN + BLOCK_LEN * (plaintext_len / BLOCK_LEN + 1)
}

/// Structural check only: IV present and ciphertext block-aligned.
pub fn is_envelope(data: &[u8]) -> bool {
    data.len() > IV_LEN && (data.len() - IV_LEN) % BLOCK_LEN == 0
}
