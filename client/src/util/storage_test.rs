use super::*;
use crate::util::testing::MemoryStorage;

const KEY: &str = "urlToShorten";
const TEN_MINUTES: Duration = Duration::from_secs(600);

#[test]
fn read_before_expiry_returns_value_and_removes_key() {
    let store = MemoryStorage::default();
    set_with_expiry(&store, KEY, &"https://example.com/page", TEN_MINUTES, 1_000);

    let value: Option<String> = get_with_expiry(&store, KEY, 1_000 + 599_999);
    assert_eq!(value.as_deref(), Some("https://example.com/page"));
    assert!(!store.contains(KEY));
}

#[test]
fn read_exactly_at_expiry_still_returns_value() {
    let store = MemoryStorage::default();
    set_with_expiry(&store, KEY, &7_u32, TEN_MINUTES, 0);
    assert_eq!(get_with_expiry::<_, u32>(&store, KEY, 600_000), Some(7));
}

#[test]
fn read_after_expiry_returns_none_and_removes_key() {
    let store = MemoryStorage::default();
    set_with_expiry(&store, KEY, &"stale", TEN_MINUTES, 0);

    let value: Option<String> = get_with_expiry(&store, KEY, 600_001);
    assert_eq!(value, None);
    assert!(!store.contains(KEY));
}

#[test]
fn second_read_finds_nothing() {
    let store = MemoryStorage::default();
    set_with_expiry(&store, KEY, &"once", TEN_MINUTES, 0);
    assert_eq!(get_with_expiry::<_, String>(&store, KEY, 1).as_deref(), Some("once"));
    assert_eq!(get_with_expiry::<_, String>(&store, KEY, 2), None);
}

#[test]
fn unparsable_item_is_removed() {
    let store = MemoryStorage::default();
    store.set_item(KEY, "{not json");

    assert_eq!(get_with_expiry::<_, String>(&store, KEY, 0), None);
    assert!(!store.contains(KEY));
}

#[test]
fn missing_key_returns_none() {
    let store = MemoryStorage::default();
    assert_eq!(get_with_expiry::<_, String>(&store, KEY, 0), None);
}

#[test]
fn stored_format_matches_value_and_expiry_shape() {
    let store = MemoryStorage::default();
    set_with_expiry(&store, KEY, &"v", Duration::from_secs(1), 5);
    let raw: serde_json::Value = serde_json::from_str(&store.get_item(KEY).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "value": "v", "expiry": 1005 }));
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn local_storage_is_noop_outside_browser() {
    LocalStorage.set_item(KEY, "x");
    assert_eq!(LocalStorage.get_item(KEY), None);
    LocalStorage.remove_item(KEY);
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}
