//! One row of the dashboard URL list.
//!
//! DESIGN
//! ======
//! The row is presentational; copy, toggle and delete are reported to the
//! dashboard through callbacks carrying the URL id (or link for copy).

#[cfg(test)]
#[path = "url_list_item_test.rs"]
mod url_list_item_test;

use leptos::prelude::*;

use crate::net::types::ShortUrl;
use crate::state::dashboard::{display_title, short_link};

/// Calendar date of an ISO 8601 timestamp, or the input unchanged when it
/// does not look like one.
fn calendar_date(timestamp: &str) -> &str {
    match timestamp.get(..10) {
        Some(date) if date.as_bytes().get(4) == Some(&b'-') => date,
        _ => timestamp,
    }
}

fn clicks_label(clicks: u64) -> String {
    if clicks == 1 { "1 click".to_owned() } else { format!("{clicks} clicks") }
}

#[component]
pub fn UrlListItem(
    url: ShortUrl,
    #[prop(into)] origin: String,
    on_copy: Callback<String>,
    on_toggle: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let title = display_title(&url, &origin);
    let link = short_link(&origin, &url.short_code);
    let created = calendar_date(&url.created_at).to_owned();
    let expires = calendar_date(&url.expires_at).to_owned();
    let active = url.is_active;
    let toggle_id = url.id.clone();
    let delete_id = url.id.clone();

    view! {
        <li class="url-item" class:url-item--inactive=!active>
            <div class="url-item__main">
                <a class="url-item__title" href=link.clone() target="_blank" rel="noopener noreferrer">
                    {title}
                </a>
                <span class="url-item__original" title=url.original_url.clone()>
                    {url.original_url.clone()}
                </span>
                <span class="url-item__meta">
                    {clicks_label(url.clicks)}
                    " · created "
                    {created}
                    " · expires "
                    {expires}
                </span>
            </div>
            <div class="url-item__actions">
                <button class="btn" title="Copy link" on:click=move |_| on_copy.run(link.clone())>
                    "Copy"
                </button>
                <button class="btn" on:click=move |_| on_toggle.run(toggle_id.clone())>
                    {if active { "Deactivate" } else { "Activate" }}
                </button>
                <button
                    class="btn btn--danger"
                    title="Delete URL"
                    aria-label="Delete URL"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "✕"
                </button>
            </div>
        </li>
    }
}
