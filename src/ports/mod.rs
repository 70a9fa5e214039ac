//! Port trait definitions for the external boundaries.
//!
//! Ports define the abstract interfaces the core requires from its
//! environment: persistent storage, the real-time transport, and the
//! presentation surface. Adapters implement these ports; the sync engine
//! never sees anything more concrete.

pub mod gateway;
pub mod presenter;
pub mod store;

pub use gateway::{ConnectionGateway, GatewayEvent};
pub use presenter::Presenter;
pub use store::KeyValueStore;
