// src/encoding.rs
//! Transport encodings for envelopes
//!
//! The envelope itself is raw bytes. These encodings only wrap it for text
//! channels and files; they add no structure of their own.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeEncoding {
    #[default]
    Raw,
    Hex,
    Base64,
    /// URL-safe alphabet, no padding
    Base64Url,
}

impl EnvelopeEncoding {
    pub fn encode(self, envelope: &[u8]) -> Vec<u8> {
        match self {
            EnvelopeEncoding::Raw => envelope.to_vec(),
            EnvelopeEncoding::Hex => hex::encode(envelope).into_bytes(),
            EnvelopeEncoding::Base64 => STANDARD.encode(envelope).into_bytes(),
            EnvelopeEncoding::Base64Url => URL_SAFE_NO_PAD.encode(envelope).into_bytes(),
        }
    }

    /// Text encodings tolerate surrounding whitespace (e.g. a trailing newline).
    pub fn decode(self, data: &[u8]) -> Result<Vec<u8>> {
        let text = data.trim_ascii();
        match self {
            EnvelopeEncoding::Raw => Ok(data.to_vec()),
            EnvelopeEncoding::Hex => {
                hex::decode(text).map_err(|e| CoreError::Encoding(format!("hex: {e}")))
            }
            EnvelopeEncoding::Base64 => STANDARD
                .decode(text)
                .map_err(|e| CoreError::Encoding(format!("base64: {e}"))),
            EnvelopeEncoding::Base64Url => URL_SAFE_NO_PAD
                .decode(text)
                .map_err(|e| CoreError::Encoding(format!("base64url: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: [u8; 4] = [0x00, 0xfb, 0xff, 0x42];

    #[test]
    fn encodings_render_expected_text() {
        assert_eq!(EnvelopeEncoding::Hex.encode(&ENVELOPE), b"00fbff42");
        assert_eq!(EnvelopeEncoding::Base64.encode(&ENVELOPE), b"APv/Qg==");
        assert_eq!(EnvelopeEncoding::Base64Url.encode(&ENVELOPE), b"APv_Qg");
        assert_eq!(EnvelopeEncoding::Raw.encode(&ENVELOPE), ENVELOPE);
    }

    #[test]
    fn decode_trims_whitespace_for_text_only() {
        assert_eq!(EnvelopeEncoding::Hex.decode(b"00fbff42\n").unwrap(), ENVELOPE);
        assert_eq!(
            EnvelopeEncoding::Base64.decode(b"  APv/Qg==\r\n").unwrap(),
            ENVELOPE
        );
        assert_eq!(EnvelopeEncoding::Raw.decode(b" a\n").unwrap(), b" a\n");
    }

    #[test]
    fn malformed_text_is_an_encoding_error() {
        assert!(matches!(
            EnvelopeEncoding::Hex.decode(b"zz"),
            Err(CoreError::Encoding(_))
        ));
        assert!(matches!(
            EnvelopeEncoding::Base64Url.decode(b"APv/Qg=="),
            Err(CoreError::Encoding(_))
        ));
    }

    #[test]
    fn names_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Probe {
            encoding: EnvelopeEncoding,
        }
        let probe: Probe = toml::from_str("encoding = \"base64url\"").unwrap();
        assert_eq!(probe.encoding, EnvelopeEncoding::Base64Url);
    }
}
