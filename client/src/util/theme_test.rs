#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::testing::MemoryStorage;

#[test]
fn read_preference_defaults_to_dark_without_browser() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn commit_persists_theme_name() {
    let store = MemoryStorage::default();
    commit_to(&store, Theme::Light);
    assert_eq!(store.get_item(STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(read_preference_from(&store), Theme::Light);

    commit_to(&store, Theme::Dark);
    assert_eq!(read_preference_from(&store), Theme::Dark);
}

#[test]
fn unreadable_saved_value_is_ignored() {
    let store = MemoryStorage::default();
    store.set_item(STORAGE_KEY, "sepia");
    assert_eq!(read_preference_from(&store), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
