//! Config file loading tests

use std::io::Write;

use membercard_core::{CardConfig, CardError, Rgba};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r##"{
            "layout": { "corner_radius": 16, "card_height": 200, "max_tilt_degrees": 10 },
            "palette": { "backdrop": "#000000" },
            "content": {
                "holder_name": "Jordan Lee",
                "follower_count": 1500,
                "member_id": "ABCD000011112222",
                "expiry": "03/30",
                "tier": "GOLD",
                "star_count": 2
            }
        }"##,
    );

    let config = CardConfig::load(file.path()).unwrap();
    assert_eq!(config.layout.corner_radius, 16.0);
    assert_eq!(config.layout.card_height, 200.0);
    assert_eq!(config.layout.max_tilt_degrees, 10.0);
    assert_eq!(config.layout.horizontal_inset, 20.0);
    assert_eq!(config.palette.backdrop, Rgba::rgb(0, 0, 0));
    assert_eq!(config.content.follower_label(), "1.5K");
    assert_eq!(config.content.masked_member_id(), "•••• •••• •••• 2222");
}

#[test]
fn test_load_empty_object_gives_defaults() {
    let file = write_config("{}");
    let config = CardConfig::load(file.path()).unwrap();
    assert_eq!(config, CardConfig::default());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CardConfig::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CardError::Io(_)));
}

#[test]
fn test_load_malformed_json() {
    let file = write_config("{ \"layout\": ");
    let err = CardConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, CardError::Parse(_)));
}

#[test]
fn test_load_rejects_invalid_values() {
    let file = write_config(r#"{ "layout": { "card_height": -5 } }"#);
    let err = CardConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, CardError::InvalidConfig(_)));
    assert!(err.to_string().contains("card_height"));
}

#[test]
fn test_printed_config_loads_back() {
    let json = CardConfig::default().to_json().unwrap();
    let file = write_config(&json);
    let config = CardConfig::load(file.path()).unwrap();
    assert_eq!(config, CardConfig::default());
    assert_eq!(config.palette.surface.a, 0.85);
}
