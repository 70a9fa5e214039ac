//! The message log: an ordered, deduplicated sequence of messages.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::{DeliveryStatus, Message, MessageId};

/// Chronological ordering rule for log entries.
///
/// Orders by timestamp ascending and reports equal timestamps as equal:
/// ties are broken by insertion order, so this must only ever be used with
/// a stable sort.
#[must_use]
pub fn chronological(a: &Message, b: &Message) -> Ordering {
    a.timestamp().cmp(&b.timestamp())
}

/// The in-memory message log.
///
/// Owned exclusively by the sync engine; every other component sees
/// read-only slices. The persisted mirror is subordinate: on any conflict
/// the contents of this structure win and are re-persisted.
///
/// # Invariants
///
/// - No two entries share an identifier
/// - Entries are ordered by ascending timestamp; entries with equal
///   timestamps keep their arrival order (insertion places a new entry
///   after every existing entry with a timestamp `<=` its own)
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
    ids: HashSet<MessageId>,
}

impl MessageLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from persisted entries whose order is not trusted.
    ///
    /// Duplicate identifiers keep their first occurrence; the survivors are
    /// stably sorted by timestamp, so equal-timestamp entries retain the
    /// order they were persisted in.
    #[must_use]
    pub fn from_unsorted(entries: Vec<Message>) -> Self {
        let mut ids = HashSet::with_capacity(entries.len());
        let mut deduped: Vec<Message> = Vec::with_capacity(entries.len());
        for message in entries {
            if ids.insert(message.id()) {
                deduped.push(message);
            }
        }
        deduped.sort_by(chronological);

        Self {
            entries: deduped,
            ids,
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if an entry with the given identifier exists.
    #[must_use]
    pub fn contains(&self, id: MessageId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the ordered entries as a read-only slice.
    #[must_use]
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    /// Returns the entry with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        if !self.ids.contains(&id) {
            return None;
        }
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Inserts a message preserving chronological order.
    ///
    /// Returns `false` without touching the log if an entry with the same
    /// identifier already exists. The insertion point is after every entry
    /// with a timestamp `<=` the new one, which keeps equal-timestamp
    /// entries in arrival order.
    pub fn insert(&mut self, message: Message) -> bool {
        if !self.ids.insert(message.id()) {
            return false;
        }

        let index = self
            .entries
            .partition_point(|entry| entry.timestamp() <= message.timestamp());
        self.entries.insert(index, message);
        true
    }

    /// Advances the status of the entry with the given identifier.
    ///
    /// Returns the updated entry if the status actually moved forward, and
    /// `None` for unknown identifiers or transitions that would not advance
    /// (both are expected under at-least-once delivery and are not errors).
    pub fn advance(&mut self, id: MessageId, to: DeliveryStatus) -> Option<&Message> {
        if !self.ids.contains(&id) {
            return None;
        }

        let entry = self.entries.iter_mut().find(|entry| entry.id() == id)?;
        if entry.advance_status(to) {
            Some(&*entry)
        } else {
            None
        }
    }
}
