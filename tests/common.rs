// tests/common.rs
//! Shared test utilities: logging setup, fixtures, independent reference CBC

#![allow(dead_code)]

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use sha2::{Digest, Sha256};

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

// ============================================================================
// Fixtures
// ============================================================================

/// IV `00 01 .. 0f`
pub const COUNTING_IV: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

/// `"Hello, World!"` under `"test-key"` with `COUNTING_IV`, produced by an
/// unrelated AES implementation.
pub const HELLO_ENVELOPE_HEX: &str =
    "000102030405060708090a0b0c0d0e0fdd7cf40ee9afb91d7c3433c2c1a53c17";

/// `"The quick brown fox jumps over the lazy dog"` under `"interop-key"`
/// with an IV of sixteen `0xa5` bytes, produced by an unrelated AES implementation.
pub const FOX_ENVELOPE_HEX: &str = "a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a8024691c7071c82542d3c52f62d59d46ce017aa7cefb01315a389c3ce2c5db38187ea3eb77ca21ea866d51581406c77";

pub const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

/// Every byte value once, in order
pub fn all_byte_values() -> Vec<u8> {
    (0..=255u8).collect()
}

/// Deterministic filler that is not a repeating single byte
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

// ============================================================================
// Reference AES-256-CBC/PKCS7
// ============================================================================
//
// Built from the raw AES block primitive: chaining and padding are done by
// hand here, independently of the `cbc` crate used by the library.

pub fn reference_key(material: &[u8]) -> [u8; 32] {
    Sha256::digest(material).into()
}

pub fn reference_seal(plaintext: &[u8], material: &[u8], iv: &[u8; 16]) -> Vec<u8> {
    let cipher = Aes256::new_from_slice(&reference_key(material)).unwrap();

    let pad = 16 - plaintext.len() % 16;
    let mut padded = plaintext.to_vec();
    padded.extend(std::iter::repeat(pad as u8).take(pad));

    let mut out = iv.to_vec();
    let mut prev = *iv;
    for chunk in padded.chunks(16) {
        let mut block = Block::default();
        for i in 0..16 {
            block[i] = chunk[i] ^ prev[i];
        }
        cipher.encrypt_block(&mut block);
        prev.copy_from_slice(&block);
        out.extend_from_slice(&block);
    }
    out
}

pub fn reference_open(envelope: &[u8], material: &[u8]) -> Option<Vec<u8>> {
    if envelope.len() <= 16 || (envelope.len() - 16) % 16 != 0 {
        return None;
    }
    let cipher = Aes256::new_from_slice(&reference_key(material)).unwrap();

    let mut out = Vec::with_capacity(envelope.len() - 16);
    let mut prev = &envelope[..16];
    for chunk in envelope[16..].chunks(16) {
        let mut block = Block::clone_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        for i in 0..16 {
            out.push(block[i] ^ prev[i]);
        }
        prev = chunk;
    }

    let pad = *out.last()? as usize;
    if pad == 0 || pad > 16 || out[out.len() - pad..].iter().any(|&b| b as usize != pad) {
        return None;
    }
    out.truncate(out.len() - pad);
    Some(out)
}
