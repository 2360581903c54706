// src/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no config
//!
//! All functions work exclusively on in-memory buffers and hold no state,
//! so they are safe to call concurrently from any number of threads.
mod decrypt;
mod encrypt;
mod key;
mod rotate;

pub use decrypt::decrypt;
pub use encrypt::{encrypt, encrypt_with_iv};
pub use rotate::{rotate_key, rotate_to_random_key};
