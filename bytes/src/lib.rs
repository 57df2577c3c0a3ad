//! Byte slices that serialize to JSON strings through a pluggable encoding.
//!
//! JSON has no binary type, so every byte field needs a textual form. This
//! crate keeps that choice in one place:
//!
//! - [`ByteEncoder`]: the encode/decode strategy, with the built-ins
//!   [`HEX`] (default), [`BASE64`] and [`RAW_BASE64`] (URL-safe alphabet)
//! - [`Bytes`] and [`FixedBytes`]: containers that serialize with the
//!   active encoder
//! - [`install`] / [`with_encoder`]: select the encoder process-wide at
//!   startup, or per thread for a scope
//! - [`Encoded`] / [`DecodeSeed`]: pass an encoder explicitly instead
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use giztoy_bytes::{Bytes, RAW_BASE64, with_encoder};
//!
//! // Hex is the default
//! let data = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
//! let json = serde_json::to_string(&data).unwrap();
//! assert_eq!(json, r#""deadbeef""#);
//!
//! // Scoped override
//! let json = with_encoder(Arc::new(RAW_BASE64.clone()), || {
//!     serde_json::to_string(&data).unwrap()
//! });
//! assert_eq!(json, r#""3q2-7w""#);
//! ```
//!
//! Applications that want a different process-wide encoding install it once,
//! before anything is serialized:
//!
//! ```rust
//! use giztoy_bytes::{Config, EncodingKind};
//!
//! let config = Config { encoding: EncodingKind::Base64 };
//! config.install().unwrap();
//! ```

mod active;
pub mod as_encoded;
mod base64_encoder;
mod bytes;
mod config;
mod context;
mod encoder;
mod error;
mod fixed;
mod hex_encoder;

pub use active::{active, install, with_encoder};
pub use base64_encoder::{BASE64, Base64Encoder, RAW_BASE64};
pub use bytes::Bytes;
pub use config::{Config, EncodingKind};
pub use context::{DecodeSeed, Encoded};
pub use encoder::ByteEncoder;
pub use error::EncodingError;
pub use fixed::FixedBytes;
pub use hex_encoder::{HEX, HexEncoder};
