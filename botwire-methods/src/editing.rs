//! Editing, stopping and deleting previously sent messages.
//!
//! The edit methods address their target either by `chat_id` +
//! `message_id` or, for messages sent via inline mode, by
//! `inline_message_id` alone; which pair is set decides the response
//! shape (`Message` vs bare `true`), hence [`MessageOrBool`].

use botwire_types::{
    ChatId, InlineKeyboardMarkup, InputMedia, MessageOrBool, ParseMode, Poll,
};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Edit the text of a message.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageText {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    /// Target an ordinary chat message.
    pub fn in_chat(
        chat_id: impl Into<ChatId>,
        message_id: i64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }

    /// Target a message the bot sent via inline mode.
    pub fn inline(inline_message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        parse_mode: ParseMode,
        disable_web_page_preview: bool,
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageText {
    const NAME: &'static str = "editMessageText";
    type Response = MessageOrBool;
}

/// Edit the caption of a media message.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageCaption {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
    /// Omit to strip the caption.
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageCaption {
    pub fn in_chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            caption: None,
            parse_mode: None,
            reply_markup: None,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
            caption: None,
            parse_mode: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        caption: String,
        parse_mode: ParseMode,
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageCaption {
    const NAME: &'static str = "editMessageCaption";
    type Response = MessageOrBool;
}

/// Swap the media of a message; the new media must match what the chat
/// allows (no document-to-photo in albums, for example).
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageMedia {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
    pub media: InputMedia,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageMedia {
    pub fn in_chat(chat_id: impl Into<ChatId>, message_id: i64, media: InputMedia) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            media,
            reply_markup: None,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>, media: InputMedia) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
            media,
            reply_markup: None,
        }
    }

    optional_setters! {
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageMedia {
    const NAME: &'static str = "editMessageMedia";
    type Response = MessageOrBool;
}

/// Edit only the inline keyboard of a message.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageReplyMarkup {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
    /// Omit to remove the keyboard.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageReplyMarkup {
    pub fn in_chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            reply_markup: None,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
            reply_markup: None,
        }
    }

    optional_setters! {
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageReplyMarkup {
    const NAME: &'static str = "editMessageReplyMarkup";
    type Response = MessageOrBool;
}

/// Move a live location; possible until the `live_period` expires or
/// [`StopMessageLiveLocation`] is called.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct EditMessageLiveLocation {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageLiveLocation {
    pub fn in_chat(
        chat_id: impl Into<ChatId>,
        message_id: i64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            latitude,
            longitude,
            reply_markup: None,
        }
    }

    pub fn inline(
        inline_message_id: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
            latitude,
            longitude,
            reply_markup: None,
        }
    }

    optional_setters! {
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for EditMessageLiveLocation {
    const NAME: &'static str = "editMessageLiveLocation";
    type Response = MessageOrBool;
}

/// Stop updating a live location before the period expires.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct StopMessageLiveLocation {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopMessageLiveLocation {
    pub fn in_chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            reply_markup: None,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
            reply_markup: None,
        }
    }

    optional_setters! {
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for StopMessageLiveLocation {
    const NAME: &'static str = "stopMessageLiveLocation";
    type Response = MessageOrBool;
}

/// Stop a poll the bot sent.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct StopPoll {
    pub chat_id: ChatId,
    pub message_id: i64,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopPoll {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self { chat_id: chat_id.into(), message_id, reply_markup: None }
    }

    optional_setters! {
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for StopPoll {
    const NAME: &'static str = "stopPoll";
    type Response = Poll;
}

/// Delete a message; subject to the usual 48-hour and rights limits.
#[derive(Clone, Debug, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self { chat_id: chat_id.into(), message_id }
    }
}

impl Method for DeleteMessage {
    const NAME: &'static str = "deleteMessage";
    type Response = bool;
}
