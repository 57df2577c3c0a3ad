//! Error types for byte encoding.

use std::error::Error as StdError;

use thiserror::Error;

/// Longest prefix of rejected input kept in a [`EncodingError::Decode`].
const MAX_VALUE_CHARS: usize = 64;

/// Errors returned by byte encoders and the JSON helpers.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The document value is well-formed JSON but not a string.
    #[error("bytes: malformed document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// The document could not be parsed.
    #[error("bytes: parse string: {0}")]
    Json(#[source] serde_json::Error),

    /// The string is not valid for the encoding's alphabet or padding.
    ///
    /// `value` holds at most 64 characters of the input, followed by `…` when cut.
    #[error("bytes: invalid {encoding} string {value:?}: {source}")]
    Decode {
        encoding: &'static str,
        value: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("bytes: {encoding} encode failed: {message}")]
    Encode {
        encoding: &'static str,
        message: String,
    },

    #[error("bytes: expected {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },

    /// The process-wide encoder was already set (or already read).
    #[error("bytes: encoder already installed: {current}")]
    AlreadyInstalled { current: &'static str },

    #[error("bytes: unknown encoding {0:?}")]
    UnknownEncoding(String),
}

impl EncodingError {
    /// Builds a [`EncodingError::Decode`] for `value` rejected by `encoding`.
    ///
    /// Long values are truncated.
    pub fn decode(
        encoding: &'static str,
        value: &str,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::Decode {
            encoding,
            value: truncate(value),
            source: source.into(),
        }
    }

    /// Classifies a JSON error raised while reading a string scalar.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        if err.is_data() {
            Self::MalformedDocument(err)
        } else {
            Self::Json(err)
        }
    }
}

fn truncate(value: &str) -> String {
    match value.char_indices().nth(MAX_VALUE_CHARS) {
        Some((end, _)) => format!("{}…", &value[..end]),
        None => value.to_owned(),
    }
}
