//! Sending messages of every kind.

use botwire_types::{
    ChatAction, ChatId, InputFile, InputMedia, Message, ParseMode, ReplyMarkup,
};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Send a text message.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    /// 1-4096 characters after entity parsing.
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    /// Deliver silently; users get a notification with no sound.
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        parse_mode: ParseMode,
        disable_web_page_preview: bool,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendMessage {
    const NAME: &'static str = "sendMessage";
    type Response = Message;
}

/// Forward a message of any kind.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    /// Where the original message was sent.
    pub from_chat_id: ChatId,
    pub disable_notification: Option<bool>,
    pub message_id: i64,
}

impl ForwardMessage {
    pub fn new(
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            disable_notification: None,
            message_id,
        }
    }

    optional_setters! {
        disable_notification: bool,
    }
}

impl Method for ForwardMessage {
    const NAME: &'static str = "forwardMessage";
    type Response = Message;
}

/// Send a photo.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
    /// 0-1024 characters after entity parsing.
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo,
            caption: None,
            parse_mode: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        caption: String,
        parse_mode: ParseMode,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendPhoto {
    const NAME: &'static str = "sendPhoto";
    type Response = Message;
}

/// Send an audio file to be displayed in the music player.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendAudio {
    pub chat_id: ChatId,
    pub audio: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub duration: Option<i64>,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub thumb: Option<InputFile>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAudio {
    pub fn new(chat_id: impl Into<ChatId>, audio: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio,
            caption: None,
            parse_mode: None,
            duration: None,
            performer: None,
            title: None,
            thumb: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        caption: String,
        parse_mode: ParseMode,
        duration: i64,
        performer: String,
        title: String,
        thumb: InputFile,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendAudio {
    const NAME: &'static str = "sendAudio";
    type Response = Message;
}

/// Send a general file, up to 50 MB.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendDocument {
    pub chat_id: ChatId,
    pub document: InputFile,
    pub thumb: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            document,
            thumb: None,
            caption: None,
            parse_mode: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        thumb: InputFile,
        caption: String,
        parse_mode: ParseMode,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendDocument {
    const NAME: &'static str = "sendDocument";
    type Response = Message;
}

/// Send an MP4 video, up to 50 MB.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendVideo {
    pub chat_id: ChatId,
    pub video: InputFile,
    pub duration: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub thumb: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub supports_streaming: Option<bool>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVideo {
    pub fn new(chat_id: impl Into<ChatId>, video: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            video,
            duration: None,
            width: None,
            height: None,
            thumb: None,
            caption: None,
            parse_mode: None,
            supports_streaming: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        duration: i64,
        width: i64,
        height: i64,
        thumb: InputFile,
        caption: String,
        parse_mode: ParseMode,
        supports_streaming: bool,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendVideo {
    const NAME: &'static str = "sendVideo";
    type Response = Message;
}

/// Send an animation (GIF or soundless video).
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendAnimation {
    pub chat_id: ChatId,
    pub animation: InputFile,
    pub duration: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub thumb: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendAnimation {
    pub fn new(chat_id: impl Into<ChatId>, animation: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            animation,
            duration: None,
            width: None,
            height: None,
            thumb: None,
            caption: None,
            parse_mode: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        duration: i64,
        width: i64,
        height: i64,
        thumb: InputFile,
        caption: String,
        parse_mode: ParseMode,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendAnimation {
    const NAME: &'static str = "sendAnimation";
    type Response = Message;
}

/// Send an OGG/OPUS voice message.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendVoice {
    pub chat_id: ChatId,
    pub voice: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub duration: Option<i64>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVoice {
    pub fn new(chat_id: impl Into<ChatId>, voice: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice,
            caption: None,
            parse_mode: None,
            duration: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        caption: String,
        parse_mode: ParseMode,
        duration: i64,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendVoice {
    const NAME: &'static str = "sendVoice";
    type Response = Message;
}

/// Send a rounded-square video message.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendVideoNote {
    pub chat_id: ChatId,
    pub video_note: InputFile,
    pub duration: Option<i64>,
    /// Video width and height (diameter).
    pub length: Option<i64>,
    pub thumb: Option<InputFile>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVideoNote {
    pub fn new(chat_id: impl Into<ChatId>, video_note: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            video_note,
            duration: None,
            length: None,
            thumb: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        duration: i64,
        length: i64,
        thumb: InputFile,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendVideoNote {
    const NAME: &'static str = "sendVideoNote";
    type Response = Message;
}

/// Send a group of photos and videos as an album.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendMediaGroup {
    pub chat_id: ChatId,
    /// 2-10 items.
    pub media: Vec<InputMedia>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
}

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
        Self {
            chat_id: chat_id.into(),
            media,
            disable_notification: None,
            reply_to_message_id: None,
        }
    }

    optional_setters! {
        disable_notification: bool,
        reply_to_message_id: i64,
    }
}

impl Method for SendMediaGroup {
    const NAME: &'static str = "sendMediaGroup";
    type Response = Vec<Message>;
}

/// Send a point on the map.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    /// 60-86400 seconds: send as a live location updated via
    /// `editMessageLiveLocation`.
    pub live_period: Option<i64>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            live_period: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        live_period: i64,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendLocation {
    const NAME: &'static str = "sendLocation";
    type Response = Message;
}

/// Send a venue.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendVenue {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendVenue {
    pub fn new(
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
            foursquare_type: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        foursquare_id: String,
        foursquare_type: String,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendVenue {
    const NAME: &'static str = "sendVenue";
    type Response = Message;
}

/// Send a phone contact.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub vcard: Option<String>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendContact {
    pub fn new(
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
            vcard: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        last_name: String,
        vcard: String,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendContact {
    const NAME: &'static str = "sendContact";
    type Response = Message;
}

/// Send a native poll.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendPoll {
    pub chat_id: ChatId,
    /// 1-255 characters.
    pub question: String,
    /// 2-10 answer options, 1-100 characters each.
    pub options: Vec<String>,
    pub is_anonymous: Option<bool>,
    /// `regular` or `quiz`; regular server-side default.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub allows_multiple_answers: Option<bool>,
    /// Required for quiz polls: 0-based index of the right answer.
    pub correct_option_id: Option<i64>,
    pub explanation: Option<String>,
    pub explanation_parse_mode: Option<ParseMode>,
    /// Mutually exclusive with `close_date`.
    pub open_period: Option<i64>,
    pub close_date: Option<i64>,
    pub is_closed: Option<bool>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendPoll {
    pub fn new(
        chat_id: impl Into<ChatId>,
        question: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            question: question.into(),
            options,
            is_anonymous: None,
            kind: None,
            allows_multiple_answers: None,
            correct_option_id: None,
            explanation: None,
            explanation_parse_mode: None,
            open_period: None,
            close_date: None,
            is_closed: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        is_anonymous: bool,
        kind: String,
        allows_multiple_answers: bool,
        correct_option_id: i64,
        explanation: String,
        explanation_parse_mode: ParseMode,
        open_period: i64,
        close_date: i64,
        is_closed: bool,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendPoll {
    const NAME: &'static str = "sendPoll";
    type Response = Message;
}

/// Send a die (or dart, or basketball) with a random value.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendDice {
    pub chat_id: ChatId,
    /// `🎲`, `🎯` or `🏀`; dice server-side default.
    pub emoji: Option<String>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendDice {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            emoji: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        emoji: String,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendDice {
    const NAME: &'static str = "sendDice";
    type Response = Message;
}

/// Show a chat action (typing, uploading a photo, …) for ~5 seconds or
/// until the next message arrives.
#[derive(Clone, Debug, Serialize)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action: ChatAction,
}

impl SendChatAction {
    pub fn new(chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        Self { chat_id: chat_id.into(), action }
    }
}

impl Method for SendChatAction {
    const NAME: &'static str = "sendChatAction";
    type Response = bool;
}
