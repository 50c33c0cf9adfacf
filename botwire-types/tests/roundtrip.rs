//! Record round-trips: decode → encode → decode must be lossless, and
//! absent optionals must stay absent (never become `null`).

use botwire_types::{
    ApiResponse, Audio, ChatId, InlineQueryResultArticle, InputTextMessageContent, Message,
    Update, User,
};
use serde_json::{Value, json};

fn roundtrip<T>(fixture: Value) -> (T, Value)
where
    T: serde::de::DeserializeOwned + serde::Serialize + PartialEq + std::fmt::Debug + Clone,
{
    let decoded: T = serde_json::from_value(fixture.clone()).unwrap();
    let encoded = serde_json::to_value(&decoded).unwrap();
    let again: T = serde_json::from_value(encoded.clone()).unwrap();
    assert_eq!(again, decoded);
    (decoded, encoded)
}

// ── Optionals absent ──────────────────────────────────────────────────────────

#[test]
fn minimal_user_roundtrips_without_null_padding() {
    let fixture = json!({"id": 7, "is_bot": false, "first_name": "Ada"});
    let (user, encoded) = roundtrip::<User>(fixture.clone());
    assert_eq!(user.last_name, None);
    // Exactly the input comes back; no null-valued keys appear.
    assert_eq!(encoded, fixture);
}

#[test]
fn minimal_message_reencodes_to_its_input() {
    let fixture = json!({
        "message_id": 1,
        "date": 1_589_000_000,
        "chat": {"id": 42, "type": "private"},
    });
    let (_, encoded) = roundtrip::<Message>(fixture.clone());
    assert_eq!(encoded, fixture);
}

// ── Optionals present ─────────────────────────────────────────────────────────

#[test]
fn full_audio_roundtrips() {
    let fixture = json!({
        "file_id": "AgAD",
        "file_unique_id": "u1",
        "duration": 213,
        "performer": "Klaus",
        "title": "Radioactivity",
        "mime_type": "audio/mpeg",
        "file_size": 3_400_000,
        "thumb": {
            "file_id": "AgTh",
            "file_unique_id": "u2",
            "width": 90,
            "height": 90,
        },
    });
    let (audio, encoded) = roundtrip::<Audio>(fixture.clone());
    assert_eq!(audio.performer.as_deref(), Some("Klaus"));
    assert_eq!(audio.thumb.as_ref().unwrap().width, 90);
    assert_eq!(encoded, fixture);
}

#[test]
fn update_with_nested_message_roundtrips() {
    let fixture = json!({
        "update_id": 8_000_001,
        "message": {
            "message_id": 3,
            "date": 1_589_000_100,
            "chat": {"id": -100_123, "type": "supergroup", "title": "lobby"},
            "from": {"id": 7, "is_bot": false, "first_name": "Ada"},
            "text": "/start",
            "entities": [{"type": "bot_command", "offset": 0, "length": 6}],
        },
    });
    let (update, encoded) = roundtrip::<Update>(fixture.clone());
    let message = update.message.as_ref().unwrap();
    assert_eq!(message.entities.as_ref().unwrap()[0].kind, "bot_command");
    assert_eq!(encoded, fixture);
}

#[test]
fn article_with_nested_union_roundtrips() {
    let article = InlineQueryResultArticle::new(
        "r1",
        "Hello",
        InputTextMessageContent::new("hello world").into(),
    );
    let encoded = serde_json::to_value(&article).unwrap();
    assert_eq!(
        encoded,
        json!({
            "type": "article",
            "id": "r1",
            "title": "Hello",
            "input_message_content": {"message_text": "hello world"},
        }),
    );
    let decoded: InlineQueryResultArticle = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, article);
}

// ── ChatId ────────────────────────────────────────────────────────────────────

#[test]
fn chat_id_both_arms() {
    let id: ChatId = serde_json::from_value(json!(-1001234)).unwrap();
    assert_eq!(id, ChatId::Id(-1001234));
    assert_eq!(serde_json::to_value(&id).unwrap(), json!(-1001234));

    let name: ChatId = serde_json::from_value(json!("@durov")).unwrap();
    assert_eq!(name, ChatId::Username("@durov".to_owned()));
    assert_eq!(serde_json::to_value(&name).unwrap(), json!("@durov"));
}

// ── Response envelope ─────────────────────────────────────────────────────────

#[test]
fn ok_envelope_yields_result() {
    let response: ApiResponse<User> = serde_json::from_value(json!({
        "ok": true,
        "result": {"id": 7, "is_bot": true, "first_name": "wire_bot"},
    }))
    .unwrap();
    let user = response.into_result().unwrap();
    assert_eq!(user.id, 7);
}

#[test]
fn error_envelope_yields_api_error_with_parameters() {
    let response: ApiResponse<User> = serde_json::from_value(json!({
        "ok": false,
        "error_code": 429,
        "description": "Too Many Requests: retry after 14",
        "parameters": {"retry_after": 14},
    }))
    .unwrap();
    let err = response.into_result().unwrap_err();
    assert_eq!(err.error_code, Some(429));
    assert_eq!(err.retry_after(), Some(14));
    assert!(err.to_string().contains("429"));
    assert!(err.to_string().contains("retry after 14s"));
}

#[test]
fn ok_envelope_without_result_is_an_error() {
    let response: ApiResponse<User> =
        serde_json::from_value(json!({"ok": true})).unwrap();
    assert!(response.into_result().is_err());
}
