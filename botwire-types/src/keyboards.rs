//! Reply markups: custom keyboards, inline keyboards and their buttons.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::message::Message;
use crate::one_of::one_of;
use crate::user::User;

one_of! {
    /// Any of the four reply-markup shapes a send method accepts.
    pub enum ReplyMarkup {
        InlineKeyboard(InlineKeyboardMarkup),
        ReplyKeyboard(ReplyKeyboardMarkup),
        ReplyKeyboardRemove(ReplyKeyboardRemove),
        ForceReply(ForceReply),
    }
}

/// A custom keyboard shown instead of the device keyboard.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    /// Button rows.
    pub keyboard: Vec<Vec<KeyboardButton>>,
    /// Fit the keyboard height to the number of rows.
    pub resize_keyboard: Option<bool>,
    /// Hide the keyboard as soon as it has been used.
    pub one_time_keyboard: Option<bool>,
    /// Show the keyboard to specific users only.
    pub selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
    pub fn new(keyboard: Vec<Vec<KeyboardButton>>) -> Self {
        Self {
            keyboard,
            resize_keyboard: None,
            one_time_keyboard: None,
            selective: None,
        }
    }
}

/// One button of a custom keyboard.
///
/// `request_contact`, `request_location` and `request_poll` are mutually
/// exclusive and only work in private chats.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    pub request_contact: Option<bool>,
    pub request_location: Option<bool>,
    pub request_poll: Option<KeyboardButtonPollType>,
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_contact: None,
            request_location: None,
            request_poll: None,
        }
    }
}

/// Restricts which poll type the user is asked to create.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButtonPollType {
    /// `quiz`, `regular`, or absent to allow either.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Removes the custom keyboard and falls back to the device keyboard.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true`.
    pub remove_keyboard: bool,
    pub selective: Option<bool>,
}

impl ReplyKeyboardRemove {
    pub fn new() -> Self {
        Self { remove_keyboard: true, selective: None }
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

/// An inline keyboard attached to the message it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    /// Button rows.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(inline_keyboard: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard }
    }
}

/// One button of an inline keyboard. Exactly one of the optional action
/// fields must be set.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub url: Option<String>,
    pub login_url: Option<LoginUrl>,
    /// 1-64 bytes, echoed back in the resulting callback query.
    pub callback_data: Option<String>,
    pub switch_inline_query: Option<String>,
    pub switch_inline_query_current_chat: Option<String>,
    pub callback_game: Option<CallbackGame>,
    /// Pay button; only valid as the first button of an invoice message.
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            login_url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
            pay: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), ..Self::bare(text) }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { callback_data: Some(data.into()), ..Self::bare(text) }
    }

    pub fn switch_inline(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self { switch_inline_query: Some(query.into()), ..Self::bare(text) }
    }
}

/// Parameters of a Telegram Login authorization button.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginUrl {
    /// HTTPS URL that receives the signed authorization data.
    pub url: String,
    pub forward_text: Option<String>,
    pub bot_username: Option<String>,
    pub request_write_access: Option<bool>,
}

/// Placeholder for a game launch button; carries no fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// An incoming callback query from an inline keyboard button.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent when the message is too old.
    pub message: Option<Message>,
    /// Set instead of `message` for inline-mode messages.
    pub inline_message_id: Option<String>,
    /// For matching against `callback_data` despite stale keyboards.
    pub chat_instance: String,
    pub data: Option<String>,
    pub game_short_name: Option<String>,
}

/// Forces a reply interface on the client, as if the user tapped Reply.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true`.
    pub force_reply: bool,
    pub selective: Option<bool>,
}

impl ForceReply {
    pub fn new() -> Self {
        Self { force_reply: true, selective: None }
    }
}

impl Default for ForceReply {
    fn default() -> Self {
        Self::new()
    }
}
