//! Chat envelope vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use wsparley_core::error::FailureCode;
use wsparley_core::protocol::envelope::{self, ChatBody, ChatSend, Kind, LoginPayload, TipsBody};

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn parse_chat_vector() {
    let env = envelope::decode(&load("envelope_chat.json")).unwrap();
    assert_eq!(env.kind, Kind::Chat);
    let body: ChatBody = env.payload_as().unwrap();
    assert_eq!(body.message, "hi");
    assert_eq!(body.sender_nick.as_deref(), Some("alice"));
}

#[test]
fn parse_tips_vector() {
    let env = envelope::decode(&load("envelope_tips.json")).unwrap();
    assert_eq!(env.kind, Kind::Tips);
    let body: TipsBody = env.payload_as().unwrap();
    assert_eq!(body.message, "server restarting");
}

#[test]
fn parse_login_vector() {
    let env = envelope::decode(&load("envelope_login.json")).unwrap();
    assert_eq!(env.kind, Kind::Login);
    let body: LoginPayload = env.payload_as().unwrap();
    assert_eq!(body.id, "u-17");
    assert_eq!(body.nick, "alice");
}

#[test]
fn unknown_kind_lands_in_other() {
    let env = envelope::decode(&load("envelope_unknown_kind.json")).unwrap();
    assert_eq!(env.kind, Kind::Other("vote".into()));
    assert_eq!(env.kind.as_str(), "vote");
}

#[test]
fn missing_kind_defaults_to_empty_other() {
    let env = envelope::decode(&load("envelope_no_kind.json")).unwrap();
    assert_eq!(env.kind, Kind::Other(String::new()));
    let body: ChatBody = env.payload_as().unwrap();
    assert_eq!(body.sender_nick.as_deref(), Some("carol"));
}

#[test]
fn server_side_extras_are_ignored() {
    // The server wraps frames in its generic reply shape (errCode/errMsg
    // alongside kind/jsonObj); the client only reads the two it knows.
    let env = envelope::decode(&load("envelope_server_extras.json")).unwrap();
    assert_eq!(env.kind, Kind::Chat);
    let body: ChatBody = env.payload_as().unwrap();
    assert_eq!(body.message, "hey");
}

#[test]
fn decode_rejects_non_json() {
    let err = envelope::decode("not json at all").unwrap_err();
    assert_eq!(err.failure_code(), FailureCode::BadEnvelope);
}

#[test]
fn decode_rejects_missing_payload() {
    let err = envelope::decode(r#"{"kind": "chat"}"#).unwrap_err();
    assert_eq!(err.failure_code(), FailureCode::BadEnvelope);
}

#[test]
fn decode_rejects_null_payload() {
    let err = envelope::decode(r#"{"kind": "chat", "jsonObj": null}"#).unwrap_err();
    assert_eq!(err.failure_code(), FailureCode::BadEnvelope);
}

#[test]
fn round_trip_chat() {
    let sent = ChatSend { message: "hello there".into() };
    let frame = envelope::encode(&Kind::Chat, &sent).unwrap();
    let env = envelope::decode(&frame).unwrap();
    assert_eq!(env.kind, Kind::Chat);
    let back: ChatSend = env.payload_as().unwrap();
    assert_eq!(back, sent);
}

#[test]
fn round_trip_login() {
    let sent = LoginPayload { id: "u-1".into(), nick: "alice".into() };
    let frame = envelope::encode(&Kind::Login, &sent).unwrap();
    let env = envelope::decode(&frame).unwrap();
    assert_eq!(env.kind, Kind::Login);
    let back: LoginPayload = env.payload_as().unwrap();
    assert_eq!(back, sent);
}

#[test]
fn encode_uses_wire_field_names() {
    let frame = envelope::encode(&Kind::Login, &LoginPayload { id: String::new(), nick: String::new() }).unwrap();
    let v: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(v["kind"], "login");
    assert!(v["jsonObj"].is_object());
}

#[test]
fn payload_shape_mismatch_is_bad_envelope() {
    let env = envelope::decode(&load("envelope_chat.json")).unwrap();
    let err = env.payload_as::<LoginPayload>().unwrap_err();
    assert_eq!(err.failure_code(), FailureCode::BadEnvelope);
}

#[test]
fn kind_wire_names() {
    assert_eq!(Kind::Login.as_str(), "login");
    assert_eq!(Kind::Chat.as_str(), "chat");
    assert_eq!(Kind::Tips.as_str(), "tips");
    assert_eq!(Kind::from("tips"), Kind::Tips);
    assert_eq!(format!("{}", Kind::Other("vote".into())), "vote");
}
