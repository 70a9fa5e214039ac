//! The message entity: one entry in the chat log.
//!
//! Identity, body, timestamp, and origin are immutable after creation. The
//! delivery status is the single mutable field and only moves forward.

use super::{DeliveryStatus, MessageId, Origin};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single chat message.
///
/// # Invariants
///
/// - `id` is unique within a log and immutable once assigned
/// - `timestamp` is populated at creation from the injected clock
/// - `status` transitions are monotonic in
///   `Pending < Sent < Delivered` (enforced by [`Message::advance_status`])
///
/// # Examples
///
/// ```
/// use mockable::DefaultClock;
/// use palaver::domain::{DeliveryStatus, Message, Origin};
///
/// let clock = DefaultClock;
/// let message = Message::compose("hello", &clock).expect("non-empty body");
///
/// assert_eq!(message.origin(), Origin::Local);
/// assert_eq!(message.status(), DeliveryStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The text payload.
    body: String,

    /// When the message was created.
    timestamp: DateTime<Utc>,

    /// Where the message entered the log.
    origin: Origin,

    /// Current delivery state.
    status: DeliveryStatus,
}

impl Message {
    /// Creates a locally authored message in the `Pending` state.
    ///
    /// The identifier is freshly generated and the timestamp is read from
    /// the injected clock.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::EmptyBody`] if the body is empty or
    /// whitespace-only.
    pub fn compose(body: impl Into<String>, clock: &impl Clock) -> Result<Self, ComposeError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ComposeError::EmptyBody);
        }

        Ok(Self {
            id: MessageId::new(),
            body,
            timestamp: clock.utc(),
            origin: Origin::Local,
            status: DeliveryStatus::Pending,
        })
    }

    /// Creates a client-generated notice in the `System` origin.
    ///
    /// Notices never travel over the transport, so they are born in the
    /// terminal `Delivered` state.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::EmptyBody`] if the body is empty or
    /// whitespace-only.
    pub fn system_notice(
        body: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, ComposeError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ComposeError::EmptyBody);
        }

        Ok(Self {
            id: MessageId::new(),
            body,
            timestamp: clock.utc(),
            origin: Origin::System,
            status: DeliveryStatus::Delivered,
        })
    }

    /// Reconstructs a message from its constituent parts.
    ///
    /// Used when decoding transport payloads in adapters and tests; the
    /// caller supplies every field, including the timestamp.
    #[must_use]
    pub const fn from_parts(
        id: MessageId,
        body: String,
        timestamp: DateTime<Utc>,
        origin: Origin,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            id,
            body,
            timestamp,
            origin,
            status,
        }
    }

    /// Re-stamps an inbound payload as a remote message.
    ///
    /// Wire payloads carry the author's view of origin and status; once a
    /// message is accepted into the local log those fields reflect this
    /// client's view instead: origin `Remote`, status `Delivered` (it is in
    /// our hands, there is nothing left to track).
    #[must_use]
    pub fn into_remote(mut self) -> Self {
        self.origin = Origin::Remote;
        self.status = DeliveryStatus::Delivered;
        self
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the text payload.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the message origin.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns the current delivery status.
    #[must_use]
    pub const fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Advances the delivery status, forward only.
    ///
    /// Returns `true` if the status changed. A target at or behind the
    /// current status leaves the message untouched and returns `false`,
    /// which makes repeated acknowledgements idempotent.
    pub fn advance_status(&mut self, to: DeliveryStatus) -> bool {
        if to > self.status {
            self.status = to;
            true
        } else {
            false
        }
    }
}

/// Errors that can occur when composing a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// The body is empty or whitespace-only.
    #[error("message body must not be empty")]
    EmptyBody,
}
