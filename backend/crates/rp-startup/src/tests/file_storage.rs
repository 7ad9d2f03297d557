use crate::{FileStorage, Storage, StorageError};

use std::path::PathBuf;

use tempfile::TempDir;

fn storage_in(temp: &TempDir) -> FileStorage {
    FileStorage::new(temp.path().join("local_storage.json"))
}

#[test]
fn given_missing_file_when_get_item_then_none() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);

    assert_eq!(storage.get_item("user").unwrap(), None);
}

#[test]
fn given_set_item_when_get_item_then_value_survives_new_instance() {
    let temp = TempDir::new().unwrap();
    storage_in(&temp)
        .set_item("user", r#"{"username":"ana"}"#)
        .unwrap();

    let reopened = storage_in(&temp);

    assert_eq!(
        reopened.get_item("user").unwrap().as_deref(),
        Some(r#"{"username":"ana"}"#)
    );
}

#[test]
fn given_nested_missing_dir_when_set_item_then_dir_created() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path().join("a").join("b").join("store.json"));

    storage.set_item("k", "v").unwrap();

    assert!(storage.path().exists());
}

#[test]
fn given_several_keys_when_remove_one_then_others_kept() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);
    storage.set_item("user", "1").unwrap();
    storage.set_item("theme", "dark").unwrap();

    storage.remove_item("user").unwrap();

    assert_eq!(storage.get_item("user").unwrap(), None);
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn given_set_item_when_done_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    storage_in(&temp).set_item("k", "v").unwrap();

    let leftovers: Vec<PathBuf> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().contains(".tmp."))
        .collect();

    assert!(leftovers.is_empty());
}

#[test]
fn given_corrupted_file_when_get_item_then_corrupted_error() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);
    std::fs::write(storage.path(), "{ not json").unwrap();

    let err = storage.get_item("user").unwrap_err();

    assert!(matches!(err, StorageError::Corrupted { .. }));
}

#[test]
fn given_corrupted_file_when_set_item_then_backed_up_and_replaced() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);
    std::fs::write(storage.path(), "{ not json").unwrap();

    storage.set_item("user", "{}").unwrap();

    assert_eq!(storage.get_item("user").unwrap().as_deref(), Some("{}"));
    let backups = std::fs::read_dir(temp.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .contains(".corrupted.")
        })
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn given_empty_file_when_get_item_then_none() {
    let temp = TempDir::new().unwrap();
    let storage = storage_in(&temp);
    std::fs::write(storage.path(), "").unwrap();

    assert_eq!(storage.get_item("user").unwrap(), None);
}

#[test]
fn given_any_error_when_recovery_hint_then_non_empty() {
    let errors = vec![
        StorageError::corrupted(PathBuf::from("/x"), "bad"),
        StorageError::file_read(
            PathBuf::from("/x"),
            std::io::Error::new(std::io::ErrorKind::Other, "test"),
        ),
        StorageError::poisoned(),
    ];

    for err in errors {
        assert!(!err.recovery_hint().is_empty(), "empty hint for {err:?}");
    }
}
