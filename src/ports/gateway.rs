//! Transport port: the bidirectional channel to the message server.
//!
//! The connection lifecycle (connect, reconnect, backoff) belongs entirely
//! to the adapter behind this port. The core only pushes outbound traffic
//! and reacts to [`GatewayEvent`]s, assuming at-least-once, possibly
//! duplicated, possibly reordered inbound delivery.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Message, MessageId};

/// An inbound event from the message server.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayEvent {
    /// A message pushed by the server. May be a re-delivery or an echo of
    /// this client's own send; the sync engine deduplicates.
    Message(Message),

    /// A counterpart received or read the identified message.
    DeliveryAck(MessageId),

    /// A search query result. Consumed by the search display surface, not
    /// by the sync core; forwarded verbatim to the presenter.
    QueryResult(Value),
}

/// Port for outbound traffic to the message server.
///
/// Methods are fire-and-forget: delivery confirmation arrives later as a
/// [`GatewayEvent`], and transport failures are the adapter's concern (a
/// disconnected adapter queues or drops and logs, it does not error back
/// into the core).
#[async_trait]
pub trait ConnectionGateway: Send + Sync {
    /// Emits a full message payload to the server.
    async fn send(&self, message: &Message);

    /// Emits a delivery acknowledgement for a received message.
    async fn acknowledge(&self, id: MessageId);
}
