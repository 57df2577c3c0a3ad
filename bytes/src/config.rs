//! Encoder selection from application configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::active::install;
use crate::base64_encoder::{BASE64, RAW_BASE64};
use crate::encoder::ByteEncoder;
use crate::error::EncodingError;
use crate::hex_encoder::HEX;

/// Names one of the built-in encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingKind {
    #[default]
    Hex,
    #[serde(alias = "b64")]
    Base64,
    #[serde(alias = "raw-b64")]
    RawBase64,
}

impl EncodingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingKind::Hex => "hex",
            EncodingKind::Base64 => "base64",
            EncodingKind::RawBase64 => "raw-base64",
        }
    }

    /// Returns the built-in encoder for this kind.
    pub fn encoder(&self) -> Arc<dyn ByteEncoder> {
        match self {
            EncodingKind::Hex => Arc::new(HEX),
            EncodingKind::Base64 => Arc::new(BASE64.clone()),
            EncodingKind::RawBase64 => Arc::new(RAW_BASE64.clone()),
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingKind {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(EncodingKind::Hex),
            "base64" | "b64" => Ok(EncodingKind::Base64),
            "raw-base64" | "raw-b64" => Ok(EncodingKind::RawBase64),
            _ => Err(EncodingError::UnknownEncoding(s.to_owned())),
        }
    }
}

/// Byte encoding section of an application config.
///
/// ```yaml
/// encoding: base64
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub encoding: EncodingKind,
}

impl Config {
    /// Installs the configured encoder process-wide. Call once at startup.
    pub fn install(&self) -> Result<(), EncodingError> {
        install(self.encoding.encoder())
    }
}
