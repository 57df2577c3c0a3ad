//! Byte slice serialized through the active encoder.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::active::active;
use crate::context::{deserialize_with, serialize_with};
use crate::error::EncodingError;

/// A byte slice that serializes to/from a JSON string using the active encoder.
///
/// The encoding is resolved at (de)serialization time, so the same value
/// renders as hex under the default encoder and as Base64 once
/// [`BASE64`](crate::BASE64) is installed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    /// Creates a new Bytes from a vector.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Creates a new empty Bytes.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the underlying vector as a mutable reference.
    pub fn as_bytes_mut(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }

    /// Consumes self and returns the underlying vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Returns true if there are no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encodes the data with the active encoder.
    pub fn encode(&self) -> Result<String, EncodingError> {
        active().encode(&self.0)
    }

    /// Decodes text with the active encoder.
    pub fn decode(s: &str) -> Result<Self, EncodingError> {
        Ok(Self(active().decode(s)?))
    }

    /// Serializes to a quoted JSON string.
    pub fn marshal_json(&self) -> Result<String, EncodingError> {
        active().marshal(&self.0)
    }

    /// Replaces the contents with the bytes encoded in the JSON string `data`.
    ///
    /// On error the contents are left untouched.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), EncodingError> {
        active().unmarshal(&mut self.0, data)
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with(&*active(), &self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_with(&*active(), deserializer).map(Self)
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Bytes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for Bytes {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(data: [u8; N]) -> Self {
        Self(data.to_vec())
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(data: Bytes) -> Self {
        data.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
