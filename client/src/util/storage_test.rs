#![cfg(not(feature = "hydrate"))]

use session::MemoryStorage;

use super::*;

#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let storage = BrowserStorage;
    storage.write("k", "v").expect("write is a no-op");
    assert_eq!(storage.read("k").expect("read"), None);
    storage.remove("k").expect("remove is a no-op");
}

#[test]
fn json_round_trips_through_storage() {
    let storage = MemoryStorage::new();
    save_json(&storage, "prefs", &vec!["a".to_owned(), "b".to_owned()]);
    let loaded: Option<Vec<String>> = load_json(&storage, "prefs");
    assert_eq!(loaded, Some(vec!["a".to_owned(), "b".to_owned()]));
}

#[test]
fn load_json_ignores_missing_and_malformed_entries() {
    let storage = MemoryStorage::new();
    assert_eq!(load_json::<Vec<String>>(&storage, "absent"), None);
    storage.write("bad", "{oops").expect("write");
    assert_eq!(load_json::<Vec<String>>(&storage, "bad"), None);
}
