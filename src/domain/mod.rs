//! Domain types for the message log.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. All types are serialisable via serde; the only mutation
//! permitted anywhere is the forward-only delivery-status advance.

pub mod calendar;
mod ids;
mod log;
mod message;
mod origin;
mod status;

pub use calendar::DayBucket;
pub use ids::MessageId;
pub use log::{MessageLog, chronological};
pub use message::{ComposeError, Message};
pub use origin::{Origin, ParseOriginError};
pub use status::{DeliveryStatus, ParseDeliveryStatusError};
