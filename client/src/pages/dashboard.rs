//! Dashboard page: create form, stats and the user's short URLs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private route. Loads `/url/my-urls` and `/url/stats` on mount, picks up a
//! URL left by the landing page, and keeps a page-local `DashboardState`
//! patched after every successful mutation.

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::url_list_item::UrlListItem;
use crate::net::types::ExpiresIn;
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::util::browser;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(DashboardState::default());
    let origin = StoredValue::new(browser::origin());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::dashboard::BANNER_TIMEOUT;
        use crate::state::home::take_pending_url;
        use crate::util::storage::{LocalStorage, now_ms};

        Effect::new(move || {
            let pending = take_pending_url(&LocalStorage, now_ms());
            state.update(|s| s.prefill(pending));
        });

        leptos::task::spawn_local(async move {
            let result = crate::net::api::client().my_urls().await;
            state.update(|s| s.apply_urls(result));
        });
        leptos::task::spawn_local(refresh_stats(state));

        // A newer banner carries a newer seq, so an older timer never clears it.
        let banner_seq = Memo::new(move |_| state.with(|s| s.banner.as_ref().map(|b| b.seq)));
        Effect::new(move || {
            let Some(seq) = banner_seq.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(BANNER_TIMEOUT).await;
                state.update(|s| s.clear_banner(seq));
            });
        });
    }

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.create_pending) {
            return;
        }
        let request = match state.with_untracked(DashboardState::create_request) {
            Ok(request) => request,
            Err(message) => {
                state.update(|s| {
                    s.show_error(message);
                });
                return;
            }
        };
        state.update(|s| s.create_pending = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::client().create_short_url(&request).await;
            if state.try_update(|s| s.apply_created(result)).unwrap_or(false) {
                refresh_stats(state).await;
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::client().delete_url(&id).await;
            if state.try_update(|s| s.apply_deleted(&id, result)).unwrap_or(false) {
                refresh_stats(state).await;
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_toggle = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::client().toggle_url(&id).await;
            if state.try_update(|s| s.apply_toggled(&id, result)).unwrap_or(false) {
                refresh_stats(state).await;
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_copy = Callback::new(move |link: String| browser::copy_to_clipboard(&link));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::auth::logout(auth));
    };

    let user_email = move || auth.get().user.map(|u| u.email).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <a class="dashboard-page__brand" href="/">"NanoCut"</a>
                <span class="dashboard-page__spacer"></span>
                <span class="dashboard-page__user">{user_email}</span>
                <ThemeToggle/>
                <button class="btn" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <Show when=move || state.with(|s| s.banner.is_some())>
                <p class="notice notice--error dashboard-page__banner" role="alert">
                    {move || state.with(|s| s.banner.as_ref().map(|b| b.text.clone()).unwrap_or_default())}
                </p>
            </Show>

            <section class="dashboard-page__stats">
                <div class="stat">
                    <span class="stat__value">{move || state.with(|s| s.stats.total_urls)}</span>
                    <span class="stat__label">"Active URLs"</span>
                </div>
                <div class="stat">
                    <span class="stat__value">{move || state.with(|s| s.stats.total_clicks)}</span>
                    <span class="stat__label">"Total Clicks"</span>
                </div>
            </section>

            <form class="create-form" on:submit=on_create>
                <input
                    class="create-form__input"
                    type="url"
                    placeholder="https://example.com/a/very/long/link"
                    prop:value=move || state.with(|s| s.original_url.clone())
                    on:input=move |ev| state.update(|s| s.original_url = event_target_value(&ev))
                />
                <input
                    class="create-form__input"
                    type="text"
                    placeholder="Custom name (optional)"
                    prop:value=move || state.with(|s| s.custom_name.clone())
                    on:input=move |ev| state.update(|s| s.custom_name = event_target_value(&ev))
                />
                <select
                    class="create-form__select"
                    prop:value=move || state.with(|s| s.expires_in.days().to_string())
                    on:change=move |ev| {
                        if let Some(expires_in) = ExpiresIn::from_days(&event_target_value(&ev)) {
                            state.update(|s| s.expires_in = expires_in);
                        }
                    }
                >
                    {ExpiresIn::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.days().to_string()>{option.label()}</option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || state.with(|s| s.create_pending)
                >
                    {move || if state.with(|s| s.create_pending) { "Shortening..." } else { "Shorten" }}
                </button>
            </form>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <Loader label="Loading your URLs..."/> }
            >
                <Show
                    when=move || state.with(|s| !s.urls.is_empty())
                    fallback=|| view! { <p class="dashboard-page__empty">"No short URLs yet."</p> }
                >
                    <ul class="url-list">
                        <For
                            each=move || state.get().urls
                            key=|url| (url.id.clone(), url.is_active, url.expires_at.clone())
                            let:url
                        >
                            <UrlListItem
                                url=url
                                origin=origin.get_value()
                                on_copy=on_copy
                                on_toggle=on_toggle
                                on_delete=on_delete
                            />
                        </For>
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_stats(state: RwSignal<DashboardState>) {
    let result = crate::net::api::client().stats().await;
    state.update(|s| s.apply_stats(result));
}
