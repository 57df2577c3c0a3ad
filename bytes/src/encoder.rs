//! The byte encoding strategy.

use std::fmt;

use crate::error::EncodingError;

/// Converts byte slices to and from printable text.
///
/// Implementations are stateless and must satisfy
/// `decode(encode(b)) == b` for every byte slice `b`.
///
/// Besides the built-ins ([`HEX`](crate::HEX), [`BASE64`](crate::BASE64),
/// [`RAW_BASE64`](crate::RAW_BASE64)), applications may install their own
/// implementation with [`install`](crate::install).
pub trait ByteEncoder: Send + Sync {
    /// Short identifier used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Encodes `bytes` to text. Either the full text or an error is returned.
    fn encode(&self, bytes: &[u8]) -> Result<String, EncodingError>;

    /// Decodes text produced by [`ByteEncoder::encode`].
    fn decode(&self, text: &str) -> Result<Vec<u8>, EncodingError>;

    /// Encodes `bytes` and quotes the result as a JSON string.
    fn marshal(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        let text = self.encode(bytes)?;
        serde_json::to_string(&text).map_err(EncodingError::Json)
    }

    /// Parses `src` as a JSON string and decodes it into `dst`.
    ///
    /// `dst` is replaced only when both steps succeed.
    fn unmarshal(&self, dst: &mut Vec<u8>, src: &[u8]) -> Result<(), EncodingError> {
        let text: String = serde_json::from_slice(src).map_err(EncodingError::from_json)?;
        *dst = self.decode(&text)?;
        Ok(())
    }
}

impl fmt::Debug for dyn ByteEncoder + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByteEncoder").field(&self.name()).finish()
    }
}
