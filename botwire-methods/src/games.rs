//! Games: sending, scoring and high-score tables.

use botwire_types::{GameHighScore, InlineKeyboardMarkup, Message, MessageOrBool};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Send a game. Games live in private chats and groups, so `chat_id`
/// is numeric.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendGame {
    pub chat_id: i64,
    /// Short name registered with BotFather.
    pub game_short_name: String,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    /// Defaults to a single Play button when absent.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendGame {
    pub fn new(chat_id: i64, game_short_name: impl Into<String>) -> Self {
        Self {
            chat_id,
            game_short_name: game_short_name.into(),
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for SendGame {
    const NAME: &'static str = "sendGame";
    type Response = Message;
}

/// Post a user's score in a game message.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SetGameScore {
    pub user_id: i64,
    /// Non-negative.
    pub score: i64,
    /// Allow the score to decrease (for banning cheaters, say).
    pub force: Option<bool>,
    /// Keep the game message's score table untouched.
    pub disable_edit_message: Option<bool>,
    pub chat_id: Option<i64>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
}

impl SetGameScore {
    /// Target a game message in a chat.
    pub fn in_chat(user_id: i64, score: i64, chat_id: i64, message_id: i64) -> Self {
        Self {
            user_id,
            score,
            force: None,
            disable_edit_message: None,
            chat_id: Some(chat_id),
            message_id: Some(message_id),
            inline_message_id: None,
        }
    }

    /// Target a game message sent via inline mode.
    pub fn inline(user_id: i64, score: i64, inline_message_id: impl Into<String>) -> Self {
        Self {
            user_id,
            score,
            force: None,
            disable_edit_message: None,
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
        }
    }

    optional_setters! {
        force: bool,
        disable_edit_message: bool,
    }
}

impl Method for SetGameScore {
    const NAME: &'static str = "setGameScore";
    type Response = MessageOrBool;
}

/// The target user's score and the scores around it. Returns up to
/// two neighbours on each side.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct GetGameHighScores {
    pub user_id: i64,
    pub chat_id: Option<i64>,
    pub message_id: Option<i64>,
    pub inline_message_id: Option<String>,
}

impl GetGameHighScores {
    pub fn in_chat(user_id: i64, chat_id: i64, message_id: i64) -> Self {
        Self {
            user_id,
            chat_id: Some(chat_id),
            message_id: Some(message_id),
            inline_message_id: None,
        }
    }

    pub fn inline(user_id: i64, inline_message_id: impl Into<String>) -> Self {
        Self {
            user_id,
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
        }
    }
}

impl Method for GetGameHighScores {
    const NAME: &'static str = "getGameHighScores";
    type Response = Vec<GameHighScore>;
}
