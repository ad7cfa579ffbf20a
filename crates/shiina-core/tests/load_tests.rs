use std::path::PathBuf;

use shiina_core::{load, ShiinaError, Type, Value};

/// Helper: path to a file under tests/fixtures.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn load_sample_document() {
    let value = load(fixture("sample.txt")).unwrap();
    assert_eq!(value.value_type(), Type::Object);
    assert_eq!(value["name"], Value::from("shiina"));
    assert_eq!(value["version"].as_number().unwrap(), 1.5);
    assert_eq!(value["nested"]["hoge"].as_number().unwrap(), 3.141592);
    assert!(value["nested"]["flag"].as_boolean().unwrap());
    assert!(value["nested"]["nothing"].is_null());

    let tags = value["tags"].as_array().unwrap();
    assert_eq!(tags, &vec![Value::from("parser"), Value::from("value")]);
}

#[test]
fn load_via_value_associated_fn() {
    assert_eq!(
        Value::load(fixture("sample.txt")).unwrap(),
        load(fixture("sample.txt")).unwrap()
    );
}

#[test]
fn load_duplicate_keys_keeps_first() {
    let value = load(fixture("duplicate_keys.txt")).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(value["a"], Value::Number(2.0));
}

#[test]
fn load_replaces_invalid_utf8() {
    let value = load(fixture("invalid_utf8.txt")).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items[0], Value::from("a\u{fffd}b"));
    assert_eq!(items[1], Value::Number(2.0));
}

#[test]
fn load_missing_file_fails() {
    let path = fixture("does-not-exist.txt");
    match load(&path) {
        Err(ShiinaError::FileNotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected file not found, got {other:?}"),
    }
}

#[test]
fn load_missing_file_message_names_path() {
    let err = load("/nonexistent/shiina.txt").unwrap_err();
    assert_eq!(err.to_string(), "file not found: /nonexistent/shiina.txt");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn load_malformed_file_is_parse_error() {
    let path = std::env::temp_dir().join("shiina-load-malformed.txt");
    std::fs::write(&path, "{\"unterminated\": [1, 2").unwrap();

    let result = load(&path);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(ShiinaError::Parse { .. })));
}

#[test]
fn load_directory_fails() {
    // Opening succeeds on some platforms and reading fails, on others opening fails.
    let dir = fixture("");
    assert!(matches!(
        load(&dir),
        Err(ShiinaError::FileNotFound { .. }) | Err(ShiinaError::Io(_))
    ));
}
