// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout cbc-envelope.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(DerivedKey32, 32); // SHA-256(key material), the AES-256 key
fixed_alias!(RandomKey32, 32); // generated key material handed to callers

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>); // recovered plaintext held between rotate steps

// Random secrets
random_alias!(RandomBytes32, 32); // OS-RNG source for `RandomKey32`
