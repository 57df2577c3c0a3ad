//! Hexadecimal encoding.

use crate::encoder::ByteEncoder;
use crate::error::EncodingError;

/// The built-in hex encoder, and the process-wide default.
pub static HEX: HexEncoder = HexEncoder;

/// Encodes each byte as two lowercase hex digits, with no prefix or separators.
///
/// Decoding accepts both cases but requires an even number of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexEncoder;

impl ByteEncoder for HexEncoder {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn encode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        Ok(hex::encode(bytes))
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        hex::decode(text).map_err(|e| EncodingError::decode(self.name(), text, e))
    }
}
