//! Application services.
//!
//! Services orchestrate the domain over the ports; the only one in this
//! crate is the sync engine, which owns the message log.

pub mod sync;

pub use sync::SyncEngine;
