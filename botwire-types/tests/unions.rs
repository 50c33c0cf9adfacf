//! Union decode/encode semantics: first-match ordering, flattening,
//! and failure diagnostics.

use botwire_types::{
    Either, InlineQueryResult, InputFile, InputMedia, InputMediaPhoto, InputMessageContent,
    Message, MessageOrBool, PassportElementError, ReplyKeyboardRemove, ReplyMarkup,
};
use serde_json::json;

// ── First-match ordering ──────────────────────────────────────────────────────

#[test]
fn subset_candidate_declared_earlier_wins() {
    // Location's required fields are a strict subset of Venue's; an
    // input with only latitude/longitude must pick Location.
    let value = json!({"latitude": 52.1, "longitude": 4.3});
    let content: InputMessageContent = serde_json::from_value(value).unwrap();
    match content {
        InputMessageContent::Location(loc) => {
            assert_eq!(loc.latitude, 52.1);
            assert_eq!(loc.longitude, 4.3);
        }
        other => panic!("expected Location, got {other:?}"),
    }
}

#[test]
fn venue_shaped_input_still_decodes_as_location() {
    // The documented sharp edge: a full venue payload also satisfies
    // the earlier Location candidate, so Location wins.
    let value = json!({
        "latitude": 52.1,
        "longitude": 4.3,
        "title": "Mauritshuis",
        "address": "Plein 29",
    });
    let content: InputMessageContent = serde_json::from_value(value).unwrap();
    assert!(matches!(content, InputMessageContent::Location(_)));
}

#[test]
fn text_content_decodes_as_text() {
    let value = json!({"message_text": "hi there"});
    let content: InputMessageContent = serde_json::from_value(value).unwrap();
    assert!(matches!(content, InputMessageContent::Text(_)));
}

#[test]
fn inline_result_photo_picks_photo_variant() {
    let value = json!({
        "type": "photo",
        "id": "1",
        "photo_url": "http://x/p.jpg",
        "thumb_url": "http://x/t.jpg",
    });
    let result: InlineQueryResult = serde_json::from_value(value).unwrap();
    match result {
        InlineQueryResult::Photo(photo) => {
            assert_eq!(photo.id, "1");
            assert_eq!(photo.photo_url, "http://x/p.jpg");
            assert_eq!(photo.thumb_url, "http://x/t.jpg");
        }
        other => panic!("expected Photo, got {other:?}"),
    }
}

#[test]
fn inline_result_cached_sticker_picks_cached_variant() {
    let value = json!({
        "type": "sticker",
        "id": "9",
        "sticker_file_id": "CAAD",
    });
    let result: InlineQueryResult = serde_json::from_value(value).unwrap();
    assert!(matches!(result, InlineQueryResult::CachedSticker(_)));
}

#[test]
fn identically_shaped_passport_errors_collapse_to_first() {
    // front_side / reverse_side / selfie share the same required field
    // set; decoding always lands on the earliest.
    let value = json!({
        "source": "selfie",
        "type": "passport",
        "file_hash": "aGFzaA==",
        "message": "blurry",
    });
    let error: PassportElementError = serde_json::from_value(value).unwrap();
    assert!(matches!(error, PassportElementError::FrontSide(_)));
}

#[test]
fn reply_markup_variants_decode_by_shape() {
    let remove: ReplyMarkup =
        serde_json::from_value(json!({"remove_keyboard": true})).unwrap();
    assert!(matches!(remove, ReplyMarkup::ReplyKeyboardRemove(_)));

    let force: ReplyMarkup = serde_json::from_value(json!({"force_reply": true})).unwrap();
    assert!(matches!(force, ReplyMarkup::ForceReply(_)));

    let inline: ReplyMarkup =
        serde_json::from_value(json!({"inline_keyboard": []})).unwrap();
    assert!(matches!(inline, ReplyMarkup::InlineKeyboard(_)));
}

// ── Encode flattening ─────────────────────────────────────────────────────────

#[test]
fn either_left_encodes_as_payload_alone() {
    let tagged = Either::<InputFile, String>::Left(InputFile::file_id("abc"));
    let bare = InputFile::file_id("abc");
    assert_eq!(
        serde_json::to_string(&tagged).unwrap(),
        serde_json::to_string(&bare).unwrap(),
    );
}

#[test]
fn either_right_encodes_as_payload_alone() {
    let tagged = Either::<InputFile, String>::Right("plain".to_owned());
    assert_eq!(serde_json::to_string(&tagged).unwrap(), "\"plain\"");
}

#[test]
fn one_of_union_encodes_without_wrapper_or_tag() {
    let photo = InputMediaPhoto::new(InputFile::url("http://x/p.jpg"));
    let union = InputMedia::Photo(photo.clone());
    assert_eq!(
        serde_json::to_string(&union).unwrap(),
        serde_json::to_string(&photo).unwrap(),
    );
    // No synthetic discriminant key alongside the payload's own fields.
    let value = serde_json::to_value(&union).unwrap();
    let keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["type", "media"]);
}

#[test]
fn reply_keyboard_remove_from_impl_wraps() {
    let markup: ReplyMarkup = ReplyKeyboardRemove::new().into();
    assert_eq!(
        serde_json::to_value(&markup).unwrap(),
        json!({"remove_keyboard": true}),
    );
}

// ── Decode failure diagnostics ────────────────────────────────────────────────

#[test]
fn no_matching_inline_result_names_the_union() {
    let err =
        serde_json::from_value::<InlineQueryResult>(json!({"garbage": 1})).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("InlineQueryResult"), "got: {text}");
    // The attempted candidates are listed for diagnosis.
    assert!(text.contains("Article"), "got: {text}");
    assert!(text.contains("CachedAudio"), "got: {text}");
    // And the offending input is echoed back.
    assert!(text.contains("garbage"), "got: {text}");
}

#[test]
fn no_matching_either_arm_reports_error() {
    let err = serde_json::from_value::<Either<Message, bool>>(json!("nope")).unwrap_err();
    assert!(err.to_string().contains("Either"));
}

// ── MessageOrBool ─────────────────────────────────────────────────────────────

#[test]
fn message_or_bool_decodes_bare_true() {
    let value: MessageOrBool = serde_json::from_value(json!(true)).unwrap();
    assert_eq!(value.right(), Some(true));
}

#[test]
fn message_or_bool_decodes_message_object() {
    let value: MessageOrBool = serde_json::from_value(json!({
        "message_id": 5,
        "date": 1_589_000_000,
        "chat": {"id": 1, "type": "private"},
        "text": "edited",
    }))
    .unwrap();
    let message = value.left().expect("should hold a Message");
    assert_eq!(message.message_id, 5);
    assert_eq!(message.text.as_deref(), Some("edited"));
}
