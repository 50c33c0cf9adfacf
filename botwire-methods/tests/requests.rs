//! Request assembly: parameter mappings, optional omission, method
//! names, and the no-null contract.

use botwire_methods::{Error, Method, Request};
use botwire_methods::chats::{GetChatMembersCount, GetMe};
use botwire_methods::editing::EditMessageText;
use botwire_methods::inline::AnswerInlineQuery;
use botwire_methods::payments::AnswerShippingQuery;
use botwire_methods::send::{SendMessage, SendPoll};
use botwire_methods::updates::GetUpdates;
use serde_json::{Value, json};

// ── Absent-optional omission ──────────────────────────────────────────────────

#[test]
fn required_only_builder_maps_only_required_keys() {
    let request = SendMessage::new(42, "hi").into_request().unwrap();
    assert_eq!(request.method, "sendMessage");
    let keys: Vec<&str> = request.params.keys().map(String::as_str).collect();
    assert_eq!(keys, ["chat_id", "text"]);
    assert!(request.params.values().all(|v| !v.is_null()));
}

#[test]
fn parameterless_method_maps_to_empty_params() {
    let request = GetMe::new().into_request().unwrap();
    assert_eq!(request.method, "getMe");
    assert!(request.params.is_empty());
}

#[test]
fn default_get_updates_sends_nothing() {
    let request = GetUpdates::new().into_request().unwrap();
    assert!(request.params.is_empty());
}

#[test]
fn set_optionals_appear_in_the_mapping() {
    let request = GetUpdates::new()
        .offset(100)
        .timeout(30)
        .into_request()
        .unwrap();
    assert_eq!(request.params.get("offset"), Some(&json!(100)));
    assert_eq!(request.params.get("timeout"), Some(&json!(30)));
    assert!(!request.params.contains_key("limit"));
}

// ── Parameter contents ────────────────────────────────────────────────────────

#[test]
fn chat_id_username_serializes_as_string() {
    let request = GetChatMembersCount::new("@rustlang").into_request().unwrap();
    assert_eq!(request.params.get("chat_id"), Some(&json!("@rustlang")));
}

#[test]
fn poll_kind_maps_to_wire_name_type() {
    let request = SendPoll::new(1, "best crate?", vec!["serde".into(), "tokio".into()])
        .kind("quiz".to_owned())
        .correct_option_id(0)
        .into_request()
        .unwrap();
    assert_eq!(request.params.get("type"), Some(&json!("quiz")));
    assert!(!request.params.contains_key("kind"));
}

#[test]
fn inline_edit_carries_no_chat_target() {
    let request = EditMessageText::inline("inl-1", "new text")
        .into_request()
        .unwrap();
    assert_eq!(request.params.get("inline_message_id"), Some(&json!("inl-1")));
    assert!(!request.params.contains_key("chat_id"));
    assert!(!request.params.contains_key("message_id"));
}

#[test]
fn nested_union_parameter_flattens_into_params() {
    use botwire_types::{InlineQueryResultPhoto, InlineQueryResult};

    let photo: InlineQueryResult =
        InlineQueryResultPhoto::new("1", "http://x/p.jpg", "http://x/t.jpg").into();
    let request = AnswerInlineQuery::new("q7", vec![photo]).into_request().unwrap();

    let results = request.params.get("results").unwrap().as_array().unwrap();
    assert_eq!(results.len(), 1);
    // The union serialized as the payload alone: its own keys, no tag.
    assert_eq!(results[0].get("type"), Some(&json!("photo")));
    assert_eq!(results[0].get("photo_url"), Some(&json!("http://x/p.jpg")));
    assert!(results[0].get("caption").is_none());
}

#[test]
fn shipping_answer_helpers_set_the_flag() {
    let ok = AnswerShippingQuery::ok("s1", vec![]).into_request().unwrap();
    assert_eq!(ok.params.get("ok"), Some(&json!(true)));
    assert!(!ok.params.contains_key("error_message"));

    let err = AnswerShippingQuery::error("s1", "no couriers")
        .into_request()
        .unwrap();
    assert_eq!(err.params.get("ok"), Some(&json!(false)));
    assert_eq!(err.params.get("error_message"), Some(&json!("no couriers")));
}

// ── Request::new guarantees ───────────────────────────────────────────────────

/// A hand-written impl that leaks an explicit null, to prove the
/// assembly strips it.
#[derive(serde::Serialize)]
struct Leaky {
    chat_id: i64,
    parse_mode: Option<String>,
}

impl Method for Leaky {
    const NAME: &'static str = "leakyMethod";
    type Response = bool;
}

#[test]
fn explicit_nulls_are_stripped_from_params() {
    let request = Request::new(&Leaky { chat_id: 1, parse_mode: None }).unwrap();
    assert_eq!(request.params.len(), 1);
    assert!(request.params.contains_key("chat_id"));
}

/// A method that does not serialize to an object at all.
struct Bogus;

impl serde::Serialize for Bogus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("not an object")
    }
}

impl Method for Bogus {
    const NAME: &'static str = "bogusMethod";
    type Response = bool;
}

#[test]
fn non_object_method_is_rejected() {
    match Request::new(&Bogus) {
        Err(Error::NotAnObject { method }) => assert_eq!(method, "bogusMethod"),
        other => panic!("expected NotAnObject, got {other:?}"),
    }
}

// ── Wire names ────────────────────────────────────────────────────────────────

#[test]
fn method_names_match_the_api() {
    assert_eq!(SendMessage::NAME, "sendMessage");
    assert_eq!(GetUpdates::NAME, "getUpdates");
    assert_eq!(EditMessageText::NAME, "editMessageText");
    assert_eq!(AnswerInlineQuery::NAME, "answerInlineQuery");
    assert_eq!(
        botwire_methods::chats::SetChatAdministratorCustomTitle::NAME,
        "setChatAdministratorCustomTitle"
    );
    assert_eq!(
        botwire_methods::stickers::SetStickerPositionInSet::NAME,
        "setStickerPositionInSet"
    );
    assert_eq!(botwire_methods::games::SetGameScore::NAME, "setGameScore");
    assert_eq!(
        botwire_methods::passport::SetPassportDataErrors::NAME,
        "setPassportDataErrors"
    );
}

// ── Serializing params onward ─────────────────────────────────────────────────

#[test]
fn params_serialize_to_a_wire_ready_body() {
    let request = SendMessage::new("@channel", "hello")
        .disable_notification(true)
        .into_request()
        .unwrap();
    let body: Value = serde_json::to_value(&request.params).unwrap();
    assert_eq!(
        body,
        json!({
            "chat_id": "@channel",
            "text": "hello",
            "disable_notification": true,
        }),
    );
}
