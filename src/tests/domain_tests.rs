//! Unit tests for the message entity, origin, and delivery status.

use mockable::DefaultClock;
use rstest::rstest;

use crate::domain::{
    ComposeError, DeliveryStatus, Message, Origin, ParseDeliveryStatusError, ParseOriginError,
};

// ============================================================================
// DeliveryStatus tests
// ============================================================================

#[rstest]
fn delivery_status_ordering_backs_monotonicity() {
    assert!(DeliveryStatus::Pending < DeliveryStatus::Sent);
    assert!(DeliveryStatus::Sent < DeliveryStatus::Delivered);
}

#[rstest]
#[case(DeliveryStatus::Pending, "pending")]
#[case(DeliveryStatus::Sent, "sent")]
#[case(DeliveryStatus::Delivered, "delivered")]
fn delivery_status_round_trips_canonical_string(
    #[case] status: DeliveryStatus,
    #[case] expected: &str,
) {
    assert_eq!(status.as_str(), expected);
    assert_eq!(DeliveryStatus::try_from(expected), Ok(status));
}

#[rstest]
fn delivery_status_parse_normalizes_case_and_whitespace() {
    assert_eq!(
        DeliveryStatus::try_from("  Sent "),
        Ok(DeliveryStatus::Sent)
    );
}

#[rstest]
fn delivery_status_parse_rejects_unknown() {
    assert_eq!(
        DeliveryStatus::try_from("read"),
        Err(ParseDeliveryStatusError("read".to_owned()))
    );
}

#[rstest]
fn only_delivered_is_terminal() {
    assert!(!DeliveryStatus::Pending.is_terminal());
    assert!(!DeliveryStatus::Sent.is_terminal());
    assert!(DeliveryStatus::Delivered.is_terminal());
}

// ============================================================================
// Origin tests
// ============================================================================

#[rstest]
#[case(Origin::Local, "local")]
#[case(Origin::Remote, "remote")]
#[case(Origin::System, "system")]
fn origin_round_trips_canonical_string(#[case] origin: Origin, #[case] expected: &str) {
    assert_eq!(origin.as_str(), expected);
    assert_eq!(Origin::try_from(expected), Ok(origin));
}

#[rstest]
fn origin_parse_rejects_unknown() {
    assert_eq!(
        Origin::try_from("server"),
        Err(ParseOriginError("server".to_owned()))
    );
}

// ============================================================================
// Message composition tests
// ============================================================================

#[rstest]
fn compose_creates_local_pending_message() {
    let clock = DefaultClock;
    let message = Message::compose("hello", &clock).expect("valid message");

    assert!(!message.id().as_ref().is_nil());
    assert_eq!(message.body(), "hello");
    assert_eq!(message.origin(), Origin::Local);
    assert_eq!(message.status(), DeliveryStatus::Pending);
    assert!(message.timestamp().timestamp() > 0);
}

#[rstest]
fn compose_generates_distinct_ids() {
    let clock = DefaultClock;
    let first = Message::compose("one", &clock).expect("valid message");
    let second = Message::compose("two", &clock).expect("valid message");

    assert_ne!(first.id(), second.id());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn compose_rejects_blank_body(#[case] body: &str) {
    let clock = DefaultClock;
    assert_eq!(
        Message::compose(body, &clock),
        Err(ComposeError::EmptyBody)
    );
}

#[rstest]
fn compose_keeps_body_verbatim() {
    let clock = DefaultClock;
    let message = Message::compose("  spaced out  ", &clock).expect("valid message");
    assert_eq!(message.body(), "  spaced out  ");
}

#[rstest]
fn system_notice_is_terminal_and_system_origin() {
    let clock = DefaultClock;
    let notice = Message::system_notice("connected", &clock).expect("valid notice");

    assert_eq!(notice.origin(), Origin::System);
    assert_eq!(notice.status(), DeliveryStatus::Delivered);
}

#[rstest]
fn system_notice_rejects_blank_body() {
    let clock = DefaultClock;
    assert_eq!(
        Message::system_notice("  ", &clock),
        Err(ComposeError::EmptyBody)
    );
}

// ============================================================================
// Status transition tests
// ============================================================================

#[rstest]
fn advance_status_moves_forward_only() {
    let clock = DefaultClock;
    let mut message = Message::compose("hi", &clock).expect("valid message");

    assert!(message.advance_status(DeliveryStatus::Sent));
    assert_eq!(message.status(), DeliveryStatus::Sent);

    // Repeats and regressions are no-ops.
    assert!(!message.advance_status(DeliveryStatus::Sent));
    assert!(!message.advance_status(DeliveryStatus::Pending));
    assert_eq!(message.status(), DeliveryStatus::Sent);

    assert!(message.advance_status(DeliveryStatus::Delivered));
    assert_eq!(message.status(), DeliveryStatus::Delivered);
}

#[rstest]
fn advance_status_can_skip_to_terminal() {
    let clock = DefaultClock;
    let mut message = Message::compose("hi", &clock).expect("valid message");

    assert!(message.advance_status(DeliveryStatus::Delivered));
    assert!(!message.advance_status(DeliveryStatus::Sent));
    assert_eq!(message.status(), DeliveryStatus::Delivered);
}

#[rstest]
fn into_remote_restamps_provenance_but_keeps_identity() {
    let clock = DefaultClock;
    let original = Message::compose("from the wire", &clock).expect("valid message");
    let id = original.id();
    let timestamp = original.timestamp();

    let remote = original.into_remote();

    assert_eq!(remote.id(), id);
    assert_eq!(remote.timestamp(), timestamp);
    assert_eq!(remote.body(), "from the wire");
    assert_eq!(remote.origin(), Origin::Remote);
    assert_eq!(remote.status(), DeliveryStatus::Delivered);
}

// ============================================================================
// Serialisation tests
// ============================================================================

#[rstest]
fn message_serde_round_trip() {
    let clock = DefaultClock;
    let message = Message::compose("round trip", &clock).expect("valid message");

    let raw = serde_json::to_string(&message).expect("serialise");
    let back: Message = serde_json::from_str(&raw).expect("deserialise");

    assert_eq!(back, message);
}

#[rstest]
fn message_wire_format_uses_snake_case_fields() {
    let clock = DefaultClock;
    let message = Message::compose("shape", &clock).expect("valid message");

    let value = serde_json::to_value(&message).expect("serialise");
    assert_eq!(value["origin"], "local");
    assert_eq!(value["status"], "pending");
    assert_eq!(value["body"], "shape");
    assert!(value["id"].is_string());
    assert!(value["timestamp"].is_string());
}
