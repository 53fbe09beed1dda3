use rnconf_fs::{ConfigFormat, ConfigStore, Error, NormalizedPath};
use serde::Deserialize;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("react-native.config.toml");
    fs::write(&file_path, "name = \"test\"\ncount = 42").unwrap();

    let store = ConfigStore::new();
    let config: TestConfig = store.load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(config.name, "test");
    assert_eq!(config.count, 42);
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("react-native.config.json");
    fs::write(&file_path, r#"{"name": "test", "count": 42}"#).unwrap();

    let store = ConfigStore::new();
    let config: TestConfig = store.load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(config, TestConfig { name: "test".into(), count: 42 });
}

#[test]
fn test_load_yml_as_untyped_value() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("react-native.config.yml");
    fs::write(&file_path, "dependency:\n  platforms:\n    ios: null\n").unwrap();

    let store = ConfigStore::new();
    let value: Value = store.load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(value, json!({"dependency": {"platforms": {"ios": null}}}));
}

#[test]
fn test_parse_error_names_format_and_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("react-native.config.json");
    fs::write(&file_path, "{ not json").unwrap();

    let err = ConfigStore::new()
        .load::<Value>(&NormalizedPath::new(&file_path))
        .unwrap_err();

    match &err {
        Error::ConfigParse { format, path, .. } => {
            assert_eq!(format, "JSON");
            assert!(path.ends_with("react-native.config.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("react-native.config.js");
    fs::write(&file_path, "module.exports = {}").unwrap();

    let err = ConfigStore::new()
        .load::<Value>(&NormalizedPath::new(&file_path))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "js"));
}

#[test]
fn test_format_detection() {
    assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
    assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
    assert_eq!(ConfigFormat::from_extension("js"), None);
}
