//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod browser;
pub mod guard;
pub mod storage;
#[cfg(test)]
pub(crate) mod testing;
pub mod theme;
