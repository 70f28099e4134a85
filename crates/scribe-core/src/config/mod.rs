//! Client configuration.
//!
//! The only knob the core needs is the base endpoint under which note
//! resources are addressed. Where that value comes from (flags, env, config
//! file) is decided by the binary.

use crate::error::{Error, Result};
use crate::util::is_http_url;

/// Base endpoint used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api/notes";

/// Resolved configuration for talking to the notes API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    /// Builds a config for an explicit base URL, normalizing it.
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_base: normalize_base_url(&api_base.into())?,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Trim a base URL, drop trailing slashes, and require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(Error::InvalidConfiguration(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}
