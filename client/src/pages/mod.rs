//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and state transitions to `state`.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod url_redirect;
pub mod verify;
