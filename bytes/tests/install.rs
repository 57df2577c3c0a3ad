//! Process-wide install. Lives in its own test binary because the encoder
//! slot can only be set once per process.

use std::sync::Arc;

use giztoy_bytes::{Bytes, Config, EncodingError, HEX, active, install, with_encoder};

#[test]
fn install_from_config() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let config: Config = serde_yaml::from_str("encoding: base64\n").unwrap();
    config.install().unwrap();
    assert_eq!(active().name(), "base64");

    // Same bytes, padded URL-safe alphabet
    let data = Bytes::from(vec![0xff, 0xfe]);
    assert_eq!(serde_json::to_string(&data).unwrap(), r#""__4=""#);
    let back: Bytes = serde_json::from_str(r#""__4=""#).unwrap();
    assert_eq!(back, data);

    // Hex text is read as Base64, not as hex
    let other: Bytes = serde_json::from_str(r#""fffe""#).unwrap();
    assert_ne!(other, data);
    assert!(serde_json::from_str::<Bytes>(r#""xyz""#).is_err());

    let err = install(Arc::new(HEX)).unwrap_err();
    assert!(matches!(err, EncodingError::AlreadyInstalled { current: "base64" }));

    let json = with_encoder(Arc::new(HEX), || serde_json::to_string(&data).unwrap());
    assert_eq!(json, r#""fffe""#);
    assert_eq!(active().name(), "base64");
}
