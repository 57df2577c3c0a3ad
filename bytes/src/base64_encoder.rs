//! URL-safe Base64 encoding.

use base64::Engine;
use base64::engine::general_purpose::{GeneralPurpose, URL_SAFE, URL_SAFE_NO_PAD};

use crate::encoder::ByteEncoder;
use crate::error::EncodingError;

/// URL-safe Base64 with `=` padding.
pub static BASE64: Base64Encoder = Base64Encoder::url_safe();

/// URL-safe Base64 without padding.
pub static RAW_BASE64: Base64Encoder = Base64Encoder::url_safe_no_pad();

/// Encodes bytes with a fixed Base64 engine.
///
/// Decoding enforces the engine's padding mode, so text produced by the
/// padded variant is rejected by the unpadded one and vice versa.
#[derive(Debug, Clone)]
pub struct Base64Encoder {
    name: &'static str,
    engine: GeneralPurpose,
}

impl Base64Encoder {
    /// Creates an encoder around an arbitrary engine, e.g.
    /// `base64::engine::general_purpose::STANDARD`.
    pub const fn new(name: &'static str, engine: GeneralPurpose) -> Self {
        Self { name, engine }
    }

    /// URL-safe alphabet with `=` padding.
    pub const fn url_safe() -> Self {
        Self::new("base64", URL_SAFE)
    }

    /// URL-safe alphabet without padding.
    pub const fn url_safe_no_pad() -> Self {
        Self::new("raw-base64", URL_SAFE_NO_PAD)
    }
}

impl ByteEncoder for Base64Encoder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        Ok(self.engine.encode(bytes))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        self.engine
            .decode(text)
            .map_err(|e| EncodingError::decode(self.name, text, e))
    }
}
