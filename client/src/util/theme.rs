//! Theme persistence and application.
//!
//! Reads the preference from `localStorage` and mirrors it onto the
//! `data-theme` attribute of the `<html>` element: `light` sets the
//! attribute, `dark` removes it. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op to keep
//! server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
use crate::util::storage::{KeyValueStore, LocalStorage};

pub const STORAGE_KEY: &str = "theme";

/// Whether the operating system asks for a light color scheme.
fn prefers_light() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Resolve the starting theme from `store` and the system hint.
pub fn read_preference_from<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    Theme::initial(store.get_item(STORAGE_KEY).as_deref(), prefers_light())
}

/// Resolve the starting theme from `localStorage`.
pub fn read_preference() -> Theme {
    read_preference_from(&LocalStorage)
}

/// Mirror `theme` onto the document element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = match theme {
                Theme::Light => el.set_attribute("data-theme", "light"),
                Theme::Dark => el.remove_attribute("data-theme"),
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` and persist it to `store`.
pub fn commit_to<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) {
    apply(theme);
    store.set_item(STORAGE_KEY, theme.as_str());
}

/// Apply `theme` and persist it to `localStorage`.
pub fn commit(theme: Theme) {
    commit_to(&LocalStorage, theme);
}
