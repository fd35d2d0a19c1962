//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `dashboard`, `theme`, etc.) so pages
//! can depend on small focused models. App-wide models are provided as
//! `RwSignal` contexts at the root; page models live in page-local signals.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod redirect;
pub mod status;
pub mod theme;
pub mod verify;
