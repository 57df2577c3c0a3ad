//! Serialization with an explicitly supplied encoder.
//!
//! [`Encoded`] and [`DecodeSeed`] bypass the active encoder entirely, for
//! callers that carry their encoding choice around themselves.

use std::fmt;

use serde::de::{self, DeserializeSeed, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};

use crate::encoder::ByteEncoder;

pub(crate) fn serialize_with<S: Serializer>(
    encoder: &dyn ByteEncoder,
    bytes: &[u8],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let text = encoder.encode(bytes).map_err(ser::Error::custom)?;
    serializer.serialize_str(&text)
}

pub(crate) fn deserialize_with<'de, D: Deserializer<'de>>(
    encoder: &dyn ByteEncoder,
    deserializer: D,
) -> Result<Vec<u8>, D::Error> {
    deserializer.deserialize_str(EncodedStrVisitor { encoder })
}

/// Accepts only string scalars and decodes them.
struct EncodedStrVisitor<'a> {
    encoder: &'a dyn ByteEncoder,
}

impl<'de> Visitor<'de> for EncodedStrVisitor<'_> {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a {}-encoded string", self.encoder.name())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        self.encoder.decode(v).map_err(E::custom)
    }
}

/// Byte slice paired with the encoder to serialize it with.
#[derive(Debug, Clone, Copy)]
pub struct Encoded<'a> {
    encoder: &'a dyn ByteEncoder,
    bytes: &'a [u8],
}

impl<'a> Encoded<'a> {
    /// Pairs `bytes` with `encoder`.
    pub fn new(encoder: &'a dyn ByteEncoder, bytes: &'a [u8]) -> Self {
        Self { encoder, bytes }
    }
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with(self.encoder, self.bytes, serializer)
    }
}

/// Deserializes an encoded string into bytes with a given encoder.
#[derive(Debug, Clone, Copy)]
pub struct DecodeSeed<'a> {
    encoder: &'a dyn ByteEncoder,
}

impl<'a> DecodeSeed<'a> {
    /// Creates a seed decoding with `encoder`.
    pub fn new(encoder: &'a dyn ByteEncoder) -> Self {
        Self { encoder }
    }
}

impl<'de> DeserializeSeed<'de> for DecodeSeed<'_> {
    type Value = Vec<u8>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserialize_with(self.encoder, deserializer)
    }
}
