//! Palaver: a chat-client message synchronization core.
//!
//! This crate maintains a local, chronologically ordered, duplicate-free log
//! of chat messages, reconciles it with a real-time message server reached
//! through an abstract event channel, mirrors it into an abstract key-value
//! store, and feeds ordered and date-bucketed views to a presentation
//! boundary.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//!   ([`domain::Message`], [`domain::MessageLog`], [`domain::DeliveryStatus`])
//! - **Ports**: Abstract trait interfaces for the storage, transport, and
//!   presentation boundaries ([`ports::KeyValueStore`],
//!   [`ports::ConnectionGateway`], [`ports::Presenter`])
//! - **Adapters**: Concrete implementations of ports
//!   ([`adapters::memory::InMemoryKeyValueStore`],
//!   [`adapters::file::JsonFileStore`], [`adapters::channel::ChannelGateway`])
//! - **Services**: The [`services::sync::SyncEngine`] state machine that owns
//!   the log and coordinates the ports
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use palaver::adapters::channel::ChannelGateway;
//! use palaver::adapters::memory::InMemoryKeyValueStore;
//! use palaver::ports::Presenter;
//! use palaver::services::sync::SyncEngine;
//!
//! struct NullPresenter;
//!
//! impl Presenter for NullPresenter {
//!     fn render(&self, _message: &palaver::domain::Message) {}
//!     fn render_status(&self, _is_online: bool) {}
//!     fn render_results(&self, _results: &serde_json::Value) {}
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (gateway, _outbound) = ChannelGateway::new();
//! let mut engine = SyncEngine::new(
//!     Arc::new(InMemoryKeyValueStore::new()),
//!     Arc::new(gateway),
//!     Arc::new(NullPresenter),
//!     Arc::new(DefaultClock),
//! );
//!
//! engine.initialize().await;
//! let id = engine.compose_and_send("hello").await;
//! assert!(id.is_some());
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
