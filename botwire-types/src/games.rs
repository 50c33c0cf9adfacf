//! HTML5 games served through the bot platform.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::media::{Animation, PhotoSize};
use crate::message::MessageEntity;
use crate::user::User;

/// A game. Use BotFather to create and edit games.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    /// 0-4096 characters; editable via `setGameScore` messages.
    pub text: Option<String>,
    pub text_entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
}

/// One row of a game's high score table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHighScore {
    /// Position in the table.
    pub position: i64,
    pub user: User,
    pub score: i64,
}
