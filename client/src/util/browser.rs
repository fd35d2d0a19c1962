//! Thin wrappers over `window.location` and the clipboard.
//!
//! Each helper no-ops (or returns a neutral value) outside the browser.

/// `window.location.origin`, or an empty string during SSR.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Full-page navigation to `url`, leaving the single-page app.
pub fn redirect_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                leptos::logging::warn!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// `navigator.onLine`; assumes online outside the browser.
pub fn is_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(true, |w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// Write `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}
