//! Inline success / error message box.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

#[component]
pub fn Notice(kind: NoticeKind, #[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class=kind.class() role="alert">
                {move || message.get()}
            </p>
        </Show>
    }
}
