//! Host process configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup, after `.env` has been loaded. Leptos' own options
//! (output name, site root, reload port) come from `get_configuration`; the
//! values here only override or extend them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;
use std::path::PathBuf;

use nanocut_client::config::parse_bool;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid {key} {value:?}: expected a boolean")]
    InvalidBool { key: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Directory holding the built `pkg/` bundle; defaults to Leptos' site root.
    pub site_root: Option<PathBuf>,
    /// Gzip responses.
    pub compression: bool,
}

impl HostConfig {
    /// Load from `PORT`, `SITE_ROOT` and `HTTP_COMPRESSION`.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup("SITE_ROOT")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let compression = match lookup("HTTP_COMPRESSION") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                key: "HTTP_COMPRESSION",
                value,
            })?,
            None => true,
        };
        Ok(Self {
            port,
            site_root,
            compression,
        })
    }
}
