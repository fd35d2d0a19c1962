//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::components::status_screen::StatusGate;
use crate::pages::{
    auth::AuthPage, dashboard::DashboardPage, home::HomePage, url_redirect::UrlRedirectPage, verify::VerifyPage,
};
use crate::state::{auth::AuthState, status::StatusState, theme::ThemeState};
use crate::util::guard::Access;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, theme and connectivity contexts, starts the
/// browser-side bootstrap tasks and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let theme = RwSignal::new(ThemeState::default());
    let status = RwSignal::new(StatusState {
        enabled: crate::config::status_check_enabled(),
        ..StatusState::default()
    });

    provide_context(auth);
    provide_context(theme);
    provide_context(status);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::client().me().await;
            if let Err(e) = &result {
                leptos::logging::log!("no active session: {e}");
            }
            auth.update(|state| state.session_checked(result));
        });

        // Load once after hydration, then mirror every change to the document.
        Effect::new(move || {
            theme.set(ThemeState {
                theme: crate::util::theme::read_preference(),
                loaded: true,
            });
        });
        Effect::new(move || {
            let state = theme.get();
            if state.loaded {
                crate::util::theme::commit(state.theme);
            }
        });

        if status.get_untracked().enabled {
            watch_connectivity(status);
            check_server(status);
        }
    }

    let on_retry = Callback::new(move |()| check_server(status));

    view! {
        <Stylesheet id="leptos" href="/pkg/nanocut.css"/>
        <Title text="NanoCut"/>

        <Router>
            <StatusGate on_retry=on_retry>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("auth")
                        view=|| view! { <RouteGuard access=Access::GuestOnly><AuthPage/></RouteGuard> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("verify"))
                        view=|| view! { <RouteGuard access=Access::GuestOnly><VerifyPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RouteGuard access=Access::Private><DashboardPage/></RouteGuard> }
                    />
                    <Route path=(StaticSegment("u"), ParamSegment("short_code")) view=UrlRedirectPage/>
                </Routes>
            </StatusGate>
        </Router>
    }
}

/// Track `online` / `offline` window events.
#[cfg(feature = "hydrate")]
fn watch_connectivity(status: RwSignal<StatusState>) {
    status.update(|s| s.online = crate::util::browser::is_online());
    let _ = window_event_listener(leptos::ev::online, move |_| status.update(|s| s.online = true));
    let _ = window_event_listener(leptos::ev::offline, move |_| status.update(|s| s.online = false));
}

/// Check `/health` and record the outcome. No-op during SSR.
fn check_server(status: RwSignal<StatusState>) {
    #[cfg(feature = "hydrate")]
    {
        if status.get_untracked().checking {
            return;
        }
        status.update(StatusState::check_started);
        leptos::task::spawn_local(async move {
            let online = crate::net::api::client().health().await;
            if !online {
                leptos::logging::warn!("health check failed");
            }
            status.update(|s| s.check_finished(online));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = status;
    }
}
