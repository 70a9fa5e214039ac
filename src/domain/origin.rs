//! Message provenance.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Where a message entered the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Authored on this client.
    Local,
    /// Pushed by the server on behalf of a counterpart.
    Remote,
    /// Produced by the client itself (notices, connection banners).
    System,
}

impl Origin {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Origin {
    type Error = ParseOriginError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            "system" => Ok(Self::System),
            _ => Err(ParseOriginError(value.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown origin string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown message origin: {0}")]
pub struct ParseOriginError(pub String);
