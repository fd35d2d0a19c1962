//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (loaders, notices, guards, list rows)
//! while reading shared state from Leptos context providers.

pub mod loader;
pub mod notice;
pub mod route_guard;
pub mod status_screen;
pub mod theme_toggle;
pub mod url_list_item;
