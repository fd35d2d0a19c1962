//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the backend endpoints behind a `Transport` seam and `types`
//! defines the JSON schema shared by every page.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
