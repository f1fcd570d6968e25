use super::*;

#[test]
fn default_config_uses_namespaced_keys() {
    let config = SessionConfig::default();
    assert_eq!(config.user_key, "clubhub.session.user");
    assert_eq!(config.token_key, "clubhub.session.token");
}

#[test]
fn read_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.read("absent").expect("read"), None);
    assert!(storage.is_empty());
}

#[test]
fn write_then_read_returns_value() {
    let storage = MemoryStorage::new();
    storage.write("k", "v1").expect("write");
    storage.write("k", "v2").expect("overwrite");
    assert_eq!(storage.read("k").expect("read").as_deref(), Some("v2"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn remove_absent_key_succeeds() {
    let storage = MemoryStorage::new();
    storage.remove("absent").expect("remove");
    storage.write("k", "v").expect("write");
    storage.remove("k").expect("remove");
    assert!(storage.is_empty());
}

#[test]
fn clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.write("shared", "yes").expect("write");
    assert_eq!(b.read("shared").expect("read").as_deref(), Some("yes"));
}
