//! Loading effect settings from disk.

use rewind::EffectsConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../rewind.toml");
    let config = EffectsConfig::from_file(path).unwrap();
    assert_eq!(config, EffectsConfig::default());
}

#[test]
fn test_custom_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"
[confetti]
angle = 90.0
element_count = 12
colors = ["#ffffff", "red"]

[sound]
throttle_ms = 250
"##
    )
    .unwrap();

    let config = EffectsConfig::load(file.path()).unwrap();
    assert_eq!(*config.confetti().angle(), 90.0);
    assert_eq!(*config.confetti().element_count(), 12);
    assert_eq!(config.confetti().palette().unwrap().len(), 2);
    assert_eq!(config.sound().throttle(), Duration::from_millis(250));
    assert!(*config.sound().enabled());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[confetti\nangle = ").unwrap();
    let err = EffectsConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
