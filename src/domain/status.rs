//! Delivery lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Delivery state of a message, advancing forward only.
///
/// The derived ordering (`Pending < Sent < Delivered`) backs the
/// monotonicity rule: a message's status never moves backward, and
/// `Delivered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Created locally, not yet acknowledged by the server.
    Pending,
    /// Acknowledged by the transport layer as delivered to the server.
    Sent,
    /// The counterpart has received or read the message. Terminal.
    Delivered,
}

impl DeliveryStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Returns `true` if no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DeliveryStatus {
    type Error = ParseDeliveryStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "delivered" => Ok(Self::Delivered),
            _ => Err(ParseDeliveryStatusError(value.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown delivery status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown delivery status: {0}")]
pub struct ParseDeliveryStatusError(pub String);
