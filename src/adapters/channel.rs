//! Channel-backed implementation of the `ConnectionGateway` port.
//!
//! Bridges the core to whatever task owns the real connection: outbound
//! traffic is pushed onto an unbounded tokio channel and the embedding
//! task (a websocket writer, a test harness) drains it. Inbound traffic
//! does not pass through here; the embedder feeds
//! [`crate::ports::GatewayEvent`]s straight into the sync engine.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::{Message, MessageId};
use crate::ports::ConnectionGateway;

/// One outbound unit of transport traffic.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundFrame {
    /// A full message payload for the server.
    Message(Message),
    /// A delivery acknowledgement for a received message.
    Ack(MessageId),
}

/// Gateway adapter that forwards outbound traffic over a tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelGateway {
    tx: mpsc::UnboundedSender<OutboundFrame>,
}

impl ChannelGateway {
    /// Creates a gateway and the receiver the embedding task drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundFrame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn push(&self, frame: OutboundFrame) {
        // A dropped receiver means the transport task is gone; per the port
        // contract that is not the core's problem.
        if self.tx.send(frame).is_err() {
            tracing::warn!("transport task gone; dropping outbound frame");
        }
    }
}

#[async_trait]
impl ConnectionGateway for ChannelGateway {
    async fn send(&self, message: &Message) {
        self.push(OutboundFrame::Message(message.clone()));
    }

    async fn acknowledge(&self, id: MessageId) {
        self.push(OutboundFrame::Ack(id));
    }
}
