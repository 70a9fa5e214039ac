//! Calendar-day bucketing of the message log.
//!
//! Buckets are a derived view for presentation: recomputed on demand,
//! keyed by the local-time calendar day, never persisted.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

use super::Message;

/// Canonical day-key format, `YYYY-MM-DD` in the local time zone.
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Returns the day key for a timestamp, in the local time zone.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use palaver::domain::calendar::bucket_key;
///
/// let noon = Local
///     .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
///     .single()
///     .expect("unambiguous local time");
/// assert_eq!(bucket_key(noon.to_utc()), "2024-01-01");
/// ```
#[must_use]
pub fn bucket_key(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(DAY_KEY_FORMAT)
        .to_string()
}

/// Returns today's day key, read from the clock on every call.
///
/// Deliberately not cached: a session that straddles midnight observes the
/// rollover on its next render.
#[must_use]
pub fn today(clock: &impl Clock) -> String {
    bucket_key(clock.utc())
}

/// One calendar day's slice of the message log.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    key: String,
    messages: Vec<Message>,
}

impl DayBucket {
    /// Returns the day key, e.g. `2024-01-01`.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the day's messages in log order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// Groups ordered messages into per-day buckets.
///
/// The input must already be in log order; buckets come out in the same
/// order, one per distinct day key.
#[must_use]
pub fn group_by_day(messages: &[Message]) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    for message in messages {
        let key = bucket_key(message.timestamp());
        match buckets.last_mut() {
            Some(bucket) if bucket.key == key => bucket.messages.push(message.clone()),
            _ => buckets.push(DayBucket {
                key,
                messages: vec![message.clone()],
            }),
        }
    }
    buckets
}
