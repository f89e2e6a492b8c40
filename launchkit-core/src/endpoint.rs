//! Endpoint addresses for the fetch action

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address fetched when the caller supplies none.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

/// Address of a JSON resource.
///
/// Deliberately unvalidated: a malformed address is reported by the
/// transport layer when the request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Pick the caller-supplied address, falling back to `default`.
    pub fn resolve(argument: Option<String>, default: &str) -> Self {
        match argument {
            Some(address) => Self(address),
            None => Self(default.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}
