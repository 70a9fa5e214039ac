//! Shared fakes and helpers for the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::domain::{DeliveryStatus, Message, MessageId, Origin};
use crate::error::StoreResult;
use crate::ports::{ConnectionGateway, KeyValueStore, Presenter};

/// Gateway fake that records every outbound call.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    pub sent: Mutex<Vec<Message>>,
    pub acks: Mutex<Vec<MessageId>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_ids(&self) -> Vec<MessageId> {
        self.sent
            .lock()
            .expect("gateway lock")
            .iter()
            .map(Message::id)
            .collect()
    }

    pub fn ack_count(&self) -> usize {
        self.acks.lock().expect("gateway lock").len()
    }
}

#[async_trait]
impl ConnectionGateway for RecordingGateway {
    async fn send(&self, message: &Message) {
        self.sent.lock().expect("gateway lock").push(message.clone());
    }

    async fn acknowledge(&self, id: MessageId) {
        self.acks.lock().expect("gateway lock").push(id);
    }
}

/// Presenter fake that records every render call.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub rendered: Mutex<Vec<Message>>,
    pub statuses: Mutex<Vec<bool>>,
    pub results: Mutex<Vec<Value>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered_ids(&self) -> Vec<MessageId> {
        self.rendered
            .lock()
            .expect("presenter lock")
            .iter()
            .map(Message::id)
            .collect()
    }

    pub fn render_count(&self) -> usize {
        self.rendered.lock().expect("presenter lock").len()
    }

    pub fn statuses(&self) -> Vec<bool> {
        self.statuses.lock().expect("presenter lock").clone()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&self, message: &Message) {
        self.rendered
            .lock()
            .expect("presenter lock")
            .push(message.clone());
    }

    fn render_status(&self, is_online: bool) {
        self.statuses.lock().expect("presenter lock").push(is_online);
    }

    fn render_results(&self, results: &Value) {
        self.results
            .lock()
            .expect("presenter lock")
            .push(results.clone());
    }
}

mockall::mock! {
    /// Key-value store whose behaviour is scripted per test.
    pub FlakyStore {}

    #[async_trait]
    impl KeyValueStore for FlakyStore {
        async fn get(&self, key: &str) -> StoreResult<Option<String>>;
        async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    }
}

/// Builds a UTC timestamp from date-time components.
pub fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid timestamp")
}

/// Builds a wire-shaped inbound message, as another client would emit it.
pub fn wire_message(body: &str, timestamp: DateTime<Utc>) -> Message {
    Message::from_parts(
        MessageId::new(),
        body.to_owned(),
        timestamp,
        Origin::Local,
        DeliveryStatus::Pending,
    )
}
