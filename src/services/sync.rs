//! The sync engine: the core state machine of the chat client.
//!
//! Reconciles locally composed messages, persisted history, and
//! server-pushed events into one consistent, duplicate-free,
//! chronologically ordered message log, and tracks delivery and
//! connectivity state against it.
//!
//! All operations run on one logical thread of control: every mutation
//! takes `&mut self`, and suspend points (storage, transport) only suspend
//! the triggering handler. Storage failures are soft everywhere; the
//! engine logs them and continues with its in-memory log, which is the
//! single source of truth.

use std::sync::Arc;

use mockable::Clock;

use crate::adapters::store::MessageStore;
use crate::domain::{DayBucket, DeliveryStatus, Message, MessageId, MessageLog, calendar};
use crate::error::StoreError;
use crate::ports::{ConnectionGateway, GatewayEvent, KeyValueStore, Presenter};

/// The message synchronization engine.
///
/// Generic over the three external boundaries plus a clock capability, so
/// it is constructible and deterministic in tests without a real
/// environment.
///
/// # State machine
///
/// Per message: `Pending` (composed locally, unacknowledged) → `Sent`
/// (server has it) → `Delivered` (counterpart received/read it, terminal).
/// Transitions only move forward; stale or unknown acknowledgements are
/// ignored.
pub struct SyncEngine<S, G, P, K>
where
    S: KeyValueStore,
    G: ConnectionGateway,
    P: Presenter,
    K: Clock + Send + Sync,
{
    store: MessageStore<S>,
    gateway: Arc<G>,
    presenter: Arc<P>,
    clock: Arc<K>,
    log: MessageLog,
    online: bool,
}

impl<S, G, P, K> SyncEngine<S, G, P, K>
where
    S: KeyValueStore,
    G: ConnectionGateway,
    P: Presenter,
    K: Clock + Send + Sync,
{
    /// Creates an engine with an empty log.
    ///
    /// Connectivity starts as offline until the first
    /// [`SyncEngine::on_connectivity_change`] event arrives.
    #[must_use]
    pub fn new(store: Arc<S>, gateway: Arc<G>, presenter: Arc<P>, clock: Arc<K>) -> Self {
        Self {
            store: MessageStore::new(store),
            gateway,
            presenter,
            clock,
            log: MessageLog::new(),
            online: false,
        }
    }

    /// Loads persisted history and performs the first render.
    ///
    /// Fails soft: if the store is unavailable or its payload corrupt, the
    /// engine logs the condition and starts with an empty log rather than
    /// blocking startup. Loaded entries are re-sorted with the stable
    /// ordering rule, since persisted order is not trusted.
    pub async fn initialize(&mut self) {
        match self.store.load_all().await {
            Ok(entries) => {
                self.log = MessageLog::from_unsorted(entries);
                tracing::debug!(count = self.log.len(), "loaded persisted message log");
            }
            Err(err) => {
                tracing::warn!(error = %err, "message log unavailable; starting empty");
                self.log = MessageLog::new();
            }
        }

        for message in self.log.entries() {
            self.presenter.render(message);
        }
        self.presenter.render_status(self.online);
    }

    /// Composes a locally authored message and sends it optimistically.
    ///
    /// Empty or whitespace-only input is rejected without any state change
    /// and returns `None`. Otherwise the message enters the log as
    /// `Pending`, is persisted, emitted to the gateway, and rendered — in
    /// that order, so the UI shows it before any network round-trip
    /// completes. Returns the freshly generated identifier.
    pub async fn compose_and_send(&mut self, text: &str) -> Option<MessageId> {
        let Ok(message) = Message::compose(text, self.clock.as_ref()) else {
            tracing::debug!("ignoring empty input");
            return None;
        };

        let id = message.id();
        self.log.insert(message.clone());
        self.persist_append(&message).await;
        self.gateway.send(&message).await;
        self.presenter.render(&message);
        Some(id)
    }

    /// Handles a message pushed by the server.
    ///
    /// Duplicate identifiers are dropped (idempotent re-delivery). A
    /// duplicate that matches a locally pending message is the server's
    /// echo of our own send: instead of duplicating it, the local copy
    /// advances to `Sent`. New messages are inserted in chronological
    /// order, persisted, rendered, and acknowledged back to the server.
    pub async fn on_server_message(&mut self, incoming: Message) {
        let id = incoming.id();
        if self.log.contains(id) {
            match self.log.advance(id, DeliveryStatus::Sent).cloned() {
                Some(updated) => {
                    self.persist_log().await;
                    self.presenter.render(&updated);
                }
                None => tracing::debug!(%id, "duplicate delivery ignored"),
            }
            return;
        }

        let message = incoming.into_remote();
        self.log.insert(message.clone());
        self.persist_append(&message).await;
        self.presenter.render(&message);
        self.gateway.acknowledge(id).await;
    }

    /// Handles a delivery acknowledgement for a previously sent message.
    ///
    /// Advances the matching entry to `Delivered`. Unknown identifiers and
    /// already-terminal entries are ignored, not errors; acknowledgements
    /// may arrive late, repeated, or after a log reset.
    pub async fn on_delivery_ack(&mut self, id: MessageId) {
        match self.log.advance(id, DeliveryStatus::Delivered).cloned() {
            Some(updated) => {
                self.persist_log().await;
                self.presenter.render(&updated);
            }
            None => tracing::debug!(%id, "ack for unknown or settled message ignored"),
        }
    }

    /// Handles a connectivity change from the host environment.
    ///
    /// Updates the process-wide flag and the presenter; the message log is
    /// untouched.
    pub fn on_connectivity_change(&mut self, is_online: bool) {
        self.online = is_online;
        self.presenter.render_status(is_online);
    }

    /// Records a client-generated notice in the log.
    ///
    /// The notice is persisted and rendered like any other message but
    /// never emitted to the gateway. Empty input is rejected as in
    /// [`SyncEngine::compose_and_send`].
    pub async fn record_system_notice(&mut self, text: &str) -> Option<MessageId> {
        let Ok(notice) = Message::system_notice(text, self.clock.as_ref()) else {
            tracing::debug!("ignoring empty system notice");
            return None;
        };

        let id = notice.id();
        self.log.insert(notice.clone());
        self.persist_append(&notice).await;
        self.presenter.render(&notice);
        Some(id)
    }

    /// Dispatches one inbound gateway event.
    ///
    /// Query results belong to the search display surface; they are routed
    /// to the presenter untouched and never reach the log.
    pub async fn handle_event(&mut self, event: GatewayEvent) {
        match event {
            GatewayEvent::Message(message) => self.on_server_message(message).await,
            GatewayEvent::DeliveryAck(id) => self.on_delivery_ack(id).await,
            GatewayEvent::QueryResult(results) => self.presenter.render_results(&results),
        }
    }

    /// Returns the ordered log as a read-only slice.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.log.entries()
    }

    /// Returns the log grouped by local calendar day, recomputed on demand.
    #[must_use]
    pub fn day_buckets(&self) -> Vec<DayBucket> {
        calendar::group_by_day(self.log.entries())
    }

    /// Returns today's day key, read from the clock on every call.
    #[must_use]
    pub fn today(&self) -> String {
        calendar::today(self.clock.as_ref())
    }

    /// Returns the current connectivity flag.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.online
    }

    /// Appends one message to the mirror, soft-failing.
    ///
    /// A corrupt mirror is rewritten wholesale from the in-memory log (the
    /// log wins on conflict); an unavailable store is logged and skipped.
    async fn persist_append(&self, message: &Message) {
        match self.store.append(message).await {
            Ok(()) => {}
            Err(StoreError::Corrupt(reason)) => {
                tracing::warn!(%reason, "persisted log corrupt; rewriting from memory");
                self.persist_log().await;
            }
            Err(err) => tracing::warn!(error = %err, "failed to persist message"),
        }
    }

    /// Rewrites the mirror from the in-memory log, soft-failing.
    async fn persist_log(&self) {
        if let Err(err) = self.store.save_all(self.log.entries()).await {
            tracing::warn!(error = %err, "failed to persist message log");
        }
    }
}
