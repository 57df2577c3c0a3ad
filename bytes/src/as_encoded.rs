//! Serde `with` module applying the active encoder to plain byte fields.
//!
//! ```rust
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Key {
//!     #[serde(with = "giztoy_bytes::as_encoded")]
//!     id: [u8; 4],
//!     #[serde(with = "giztoy_bytes::as_encoded")]
//!     blob: Vec<u8>,
//! }
//!
//! let key = Key { id: [0xde, 0xad, 0xbe, 0xef], blob: vec![0x01] };
//! let json = serde_json::to_string(&key).unwrap();
//! assert_eq!(json, r#"{"id":"deadbeef","blob":"01"}"#);
//! ```

use serde::de::Error as _;
use serde::{Deserializer, Serializer};

use crate::active::active;
use crate::context;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]> + ?Sized,
    S: Serializer,
{
    context::serialize_with(&*active(), value.as_ref(), serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: TryFrom<Vec<u8>>,
    D: Deserializer<'de>,
{
    let bytes = context::deserialize_with(&*active(), deserializer)?;
    let got = bytes.len();
    T::try_from(bytes).map_err(|_| {
        D::Error::custom(format_args!(
            "bytes: expected {}, got {got} bytes",
            std::any::type_name::<T>()
        ))
    })
}
