//! Fixed-size byte arrays serialized through the active encoder.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

use crate::active::active;
use crate::context::{deserialize_with, serialize_with};
use crate::error::EncodingError;

/// An `N`-byte array (hash, key, signature, ...) that serializes like
/// [`Bytes`](crate::Bytes) and rejects decoded input of any other length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>([u8; N]);

impl<const N: usize> FixedBytes<N> {
    /// Length of the array in bytes.
    pub const LEN: usize = N;

    /// Wraps an array.
    pub const fn new(data: [u8; N]) -> Self {
        Self(data)
    }

    /// Copies `data`, failing unless it is exactly `N` bytes long.
    pub fn from_slice(data: &[u8]) -> Result<Self, EncodingError> {
        let arr = <[u8; N]>::try_from(data).map_err(|_| EncodingError::Length {
            expected: N,
            got: data.len(),
        })?;
        Ok(Self(arr))
    }

    /// Returns the underlying array.
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Consumes self and returns the underlying array.
    pub fn into_inner(self) -> [u8; N] {
        self.0
    }

    /// Encodes the array with the active encoder.
    pub fn encode(&self) -> Result<String, EncodingError> {
        active().encode(&self.0)
    }

    /// Decodes text with the active encoder, requiring exactly `N` bytes.
    pub fn decode(s: &str) -> Result<Self, EncodingError> {
        Self::from_slice(&active().decode(s)?)
    }

    /// Serializes to a quoted JSON string.
    pub fn marshal_json(&self) -> Result<String, EncodingError> {
        active().marshal(&self.0)
    }

    /// Replaces the contents with the bytes encoded in the JSON string `data`.
    ///
    /// On error, including a length mismatch, the contents are left untouched.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), EncodingError> {
        let mut buf = Vec::with_capacity(N);
        active().unmarshal(&mut buf, data)?;
        *self = Self::from_slice(&buf)?;
        Ok(())
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}

impl<const N: usize> Serialize for FixedBytes<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_with(&*active(), &self.0, serializer)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = deserialize_with(&*active(), deserializer)?;
        Self::from_slice(&bytes).map_err(D::Error::custom)
    }
}

impl<const N: usize> Deref for FixedBytes<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(data: [u8; N]) -> Self {
        Self(data)
    }
}

impl<const N: usize> From<FixedBytes<N>> for [u8; N] {
    fn from(data: FixedBytes<N>) -> Self {
        data.0
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedBytes<N> {
    type Error = EncodingError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(data)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
