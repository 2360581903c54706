// src/lib.rs
//! cbc-envelope: AES-256-CBC/PKCS7 envelope cipher
//!
//! Features:
//! - Envelope = `IV (16 bytes) || ciphertext`, no header or tag
//! - Key = SHA-256(key material), text or bytes
//! - Fresh OS-random IV per encryption
//! - Uniform `DecryptionFailed` for wrong keys and tampered data
//! - secure-gate zeroizing wrappers for derived and generated keys
//!
//! ```
//! use cbc_envelope::{decrypt, encrypt};
//!
//! let envelope = encrypt(b"Hello, World!", "test-key").unwrap();
//! assert_eq!(envelope.len(), 32);
//! assert_eq!(decrypt(&envelope, "test-key").unwrap(), b"Hello, World!");
//! ```
//!
//! CBC without a MAC does not authenticate. Only the final two blocks and
//! the padding check are protected: a flip in the IV or in any earlier
//! ciphertext block rewrites the following plaintext block without being
//! detected, as long as it does not reach the padding.

pub mod aliases;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod file_ops;
pub mod key_material;
pub mod key_ops;
#[cfg(feature = "logging")]
pub mod logging;

// Re-export everything users need at the crate root
pub use aliases::{DerivedKey32, RandomKey32};
pub use cipher::SymmetricEnvelopeCipher;
pub use config::load as load_config;
pub use crypto::{decrypt, encrypt, encrypt_with_iv, rotate_key, rotate_to_random_key};
pub use encoding::EnvelopeEncoding;
pub use envelope::{is_envelope, sealed_len, Envelope};
pub use error::{CoreError, InputError, Result as CoreResult};
pub use file_ops::{decrypt_file, encrypt_file};
pub use key_material::KeyMaterial;
pub use key_ops::{generate_key, key_representations};
