// src/key_material.rs
//! Caller-supplied key material (the DEK before derivation)
//!
//! Borrowed for the duration of a single call and never stored. Text is
//! resolved to its UTF-8 bytes only when the key is derived.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterial<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> KeyMaterial<'a> {
    /// Canonical byte form fed to the key derivation
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            KeyMaterial::Text(text) => text.as_bytes(),
            KeyMaterial::Bytes(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

// Never print the secret itself.
impl fmt::Debug for KeyMaterial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            KeyMaterial::Text(_) => "Text",
            KeyMaterial::Bytes(_) => "Bytes",
        };
        write!(f, "KeyMaterial::{variant}(<{} bytes redacted>)", self.len())
    }
}

impl<'a> From<&'a str> for KeyMaterial<'a> {
    fn from(text: &'a str) -> Self {
        KeyMaterial::Text(text)
    }
}

impl<'a> From<&'a String> for KeyMaterial<'a> {
    fn from(text: &'a String) -> Self {
        KeyMaterial::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for KeyMaterial<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        KeyMaterial::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for KeyMaterial<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        KeyMaterial::Bytes(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for KeyMaterial<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        KeyMaterial::Bytes(bytes.as_slice())
    }
}
