//! Key/value persistence with a time-to-live.
//!
//! SYSTEM CONTEXT
//! ==============
//! Carries short-lived values across full page navigations (the landing page
//! input survives the magic-link login round trip). Items are stored as JSON
//! `{ "value": ..., "expiry": <epoch ms> }` and are single-use: reading an item
//! always deletes it, whether it was fresh, expired, or unreadable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Minimal string store, shaped after the browser `Storage` interface.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// The browser's `localStorage`. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ExpiringItem<T> {
    value: T,
    expiry: i64,
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as i64)
    }
}

/// Store `value` under `key`, readable until `now_ms + ttl`.
pub fn set_with_expiry<S, T>(store: &S, key: &str, value: &T, ttl: Duration, now_ms: i64)
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    let item = ExpiringItem {
        value,
        expiry: now_ms.saturating_add(ttl_ms),
    };
    match serde_json::to_string(&item) {
        Ok(raw) => store.set_item(key, &raw),
        Err(e) => leptos::logging::warn!("failed to serialize storage item {key:?}: {e}"),
    }
}

/// Take the value under `key` if it has not expired. The key is removed in
/// every case.
pub fn get_with_expiry<S, T>(store: &S, key: &str, now_ms: i64) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store.get_item(key)?;
    store.remove_item(key);

    match serde_json::from_str::<ExpiringItem<T>>(&raw) {
        Ok(item) if now_ms <= item.expiry => Some(item.value),
        Ok(_) => None,
        Err(e) => {
            leptos::logging::warn!("error parsing storage item {key:?}: {e}");
            None
        }
    }
}
