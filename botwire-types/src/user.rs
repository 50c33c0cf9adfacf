//! Users and their profile photos.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::media::PhotoSize;

/// A Telegram user or bot.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    /// IETF language tag of the user's language.
    pub language_code: Option<String>,
    /// `getMe` only.
    pub can_join_groups: Option<bool>,
    /// `getMe` only.
    pub can_read_all_group_messages: Option<bool>,
    /// `getMe` only.
    pub supports_inline_queries: Option<bool>,
}

/// A user's profile pictures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
    pub total_count: i64,
    /// Each photo in up to 4 sizes.
    pub photos: Vec<Vec<PhotoSize>>,
}

/// A bot command exposed through the command menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase letters, digits and underscores.
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self { command: command.into(), description: description.into() }
    }
}
