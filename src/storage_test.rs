use super::*;

#[test]
fn memory_store_round_trips_value() {
    let mut store = MemoryStore::new();
    store.save("theme", "dark").unwrap();
    assert_eq!(store.load("theme").unwrap(), Some("dark".to_string()));
}

#[test]
fn memory_store_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme").unwrap(), None);
}

#[test]
fn blocked_store_errors_on_read_and_write() {
    let mut store = MemoryStore::blocked();
    assert!(matches!(store.load("theme"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.save("theme", "dark"), Err(StorageError::WriteRejected(_))));
}

#[test]
fn read_optional_swallows_errors() {
    let store = MemoryStore::blocked();
    assert_eq!(read_optional(&store, "theme"), None);
}

#[test]
fn read_optional_returns_stored_value() {
    let store = MemoryStore::with_entry("theme", "light");
    assert_eq!(read_optional(&store, "theme"), Some("light".to_string()));
}

#[test]
fn write_best_effort_reports_outcome() {
    let mut ok = MemoryStore::new();
    assert!(write_best_effort(&mut ok, "theme", "dark"));
    assert_eq!(ok.get("theme"), Some("dark"));

    let mut blocked = MemoryStore::blocked();
    assert!(!write_best_effort(&mut blocked, "theme", "dark"));
    assert_eq!(blocked.get("theme"), None);
}

#[test]
fn storage_error_messages_name_the_failure() {
    let err = StorageError::Unavailable("quota".to_string());
    assert_eq!(err.to_string(), "storage unavailable: quota");
}
