//! Adapters for the storage, transport, and presentation ports.
//!
//! Following hexagonal architecture principles, adapters carry all
//! infrastructure concerns while the domain stays pure.
//!
//! # Available Adapters
//!
//! - [`store::MessageStore`]: the message-log mirror over any
//!   [`crate::ports::KeyValueStore`]
//! - [`memory::InMemoryKeyValueStore`]: volatile storage for tests and
//!   embedding
//! - [`file::JsonFileStore`]: durable storage inside a capability-scoped
//!   directory
//! - [`channel::ChannelGateway`]: a transport adapter that hands outbound
//!   traffic to an embedding task over tokio channels

pub mod channel;
pub mod file;
pub mod memory;
pub mod store;
