//! Tests for seeding a document when its file does not exist yet
use json_config_handle::{
    DocumentHandle, HandleConfig, Policy, json, user_config_path, with_document,
    with_document_or_init,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_is_persisted_then_file_wins() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("seeded.json");
    let key = "dummy-key";

    let handle = DocumentHandle::load_or_init(&path, json!({"dummy-key": "dummy-value"}));
    assert!(handle.is_valid());
    assert_eq!(handle.document()[key], json!("dummy-value"));
    assert!(handle.close());

    // A different default is ignored now that the file exists
    let handle = DocumentHandle::load_or_init(&path, json!({"dummy-key": "other"}));
    assert!(handle.is_valid());
    assert_eq!(handle.document(), &json!({"dummy-key": "dummy-value"}));

    let handle = DocumentHandle::load_or_init(&path, json!(null));
    assert_eq!(handle.document()[key], json!("dummy-value"));
}

#[test]
fn test_default_written_before_any_close() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("eager.json");

    let handle = DocumentHandle::load_or_init_with(&path, json!({"v": 1}), false);
    assert!(handle.is_valid());
    assert!(!handle.save_on_exit());

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    \"v\": 1\n}\n");
}

#[test]
fn test_malformed_file_is_replaced_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ this is not json").unwrap();

    let handle = DocumentHandle::load_or_init(&path, json!({"recovered": true}));
    assert!(handle.is_valid());

    let reloaded = DocumentHandle::open(&path, &HandleConfig::new(Policy::LoadExisting)).unwrap();
    assert_eq!(reloaded.document(), &json!({"recovered": true}));
}

#[test]
fn test_unwritable_default_marks_handle_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing-dir").join("seeded.json");

    let handle = DocumentHandle::load_or_init(&path, json!({"v": 1}));
    assert!(!handle.is_valid());
    assert!(!handle.close());
    assert!(!path.exists());
}

#[test]
fn test_scoped_helpers_share_one_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("scoped.json");

    with_document_or_init(&path, json!({"runs": 0}), |doc, valid| {
        assert!(valid);
        let runs = doc["runs"].as_u64().unwrap_or(0);
        doc["runs"] = json!(runs + 1);
    });

    let config = HandleConfig::new(Policy::LoadExisting).save_on_exit(true);
    let runs = with_document(&path, &config, |doc| {
        let runs = doc["runs"].as_u64().unwrap_or(0) + 1;
        doc["runs"] = json!(runs);
        runs
    })?;
    assert_eq!(runs, 2);

    let handle = DocumentHandle::open(&path, &HandleConfig::new(Policy::LoadExisting))?;
    assert_eq!(handle.document()["runs"], json!(2));
    Ok(())
}

#[test]
fn test_user_config_path_feeds_a_handle() {
    // Resolution only; the returned path is not touched
    if let Some(path) = user_config_path("json-config-handle-test", "settings.json") {
        assert_eq!(path.file_name().unwrap(), "settings.json");
        assert!(path.parent().unwrap().ends_with("json-config-handle-test"));
    }
}
