//! Sticker sending and sticker-set management.

use botwire_types::{ChatId, File, InputFile, MaskPosition, Message, ReplyMarkup, StickerSet};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Send a static or animated sticker.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendSticker {
    pub chat_id: ChatId,
    pub sticker: InputFile,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendSticker {
    pub fn new(chat_id: impl Into<ChatId>, sticker: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: ReplyMarkup,
    }
}

impl Method for SendSticker {
    const NAME: &'static str = "sendSticker";
    type Response = Message;
}

/// A sticker set by name.
#[derive(Clone, Debug, Serialize)]
pub struct GetStickerSet {
    pub name: String,
}

impl GetStickerSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Method for GetStickerSet {
    const NAME: &'static str = "getStickerSet";
    type Response = StickerSet;
}

/// Upload a PNG for later use in sticker sets.
#[derive(Clone, Debug, Serialize)]
pub struct UploadStickerFile {
    pub user_id: i64,
    pub png_sticker: InputFile,
}

impl UploadStickerFile {
    pub fn new(user_id: i64, png_sticker: InputFile) -> Self {
        Self { user_id, png_sticker }
    }
}

impl Method for UploadStickerFile {
    const NAME: &'static str = "uploadStickerFile";
    type Response = File;
}

/// Create a sticker set owned by a user. Exactly one of `png_sticker`
/// and `tgs_sticker` must be set.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct CreateNewStickerSet {
    pub user_id: i64,
    /// Set name: 1-64 characters, must end in `_by_<bot_username>`.
    pub name: String,
    pub title: String,
    pub png_sticker: Option<InputFile>,
    pub tgs_sticker: Option<InputFile>,
    pub emojis: String,
    pub contains_masks: Option<bool>,
    pub mask_position: Option<MaskPosition>,
}

impl CreateNewStickerSet {
    pub fn new(
        user_id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        emojis: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            title: title.into(),
            png_sticker: None,
            tgs_sticker: None,
            emojis: emojis.into(),
            contains_masks: None,
            mask_position: None,
        }
    }

    optional_setters! {
        png_sticker: InputFile,
        tgs_sticker: InputFile,
        contains_masks: bool,
        mask_position: MaskPosition,
    }
}

impl Method for CreateNewStickerSet {
    const NAME: &'static str = "createNewStickerSet";
    type Response = bool;
}

/// Add a sticker to an existing set. Exactly one of `png_sticker` and
/// `tgs_sticker` must be set.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct AddStickerToSet {
    pub user_id: i64,
    pub name: String,
    pub png_sticker: Option<InputFile>,
    pub tgs_sticker: Option<InputFile>,
    pub emojis: String,
    pub mask_position: Option<MaskPosition>,
}

impl AddStickerToSet {
    pub fn new(user_id: i64, name: impl Into<String>, emojis: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            png_sticker: None,
            tgs_sticker: None,
            emojis: emojis.into(),
            mask_position: None,
        }
    }

    optional_setters! {
        png_sticker: InputFile,
        tgs_sticker: InputFile,
        mask_position: MaskPosition,
    }
}

impl Method for AddStickerToSet {
    const NAME: &'static str = "addStickerToSet";
    type Response = bool;
}

/// Move a sticker within its set.
#[derive(Clone, Debug, Serialize)]
pub struct SetStickerPositionInSet {
    /// File identifier of the sticker.
    pub sticker: String,
    /// New 0-based position.
    pub position: i64,
}

impl SetStickerPositionInSet {
    pub fn new(sticker: impl Into<String>, position: i64) -> Self {
        Self { sticker: sticker.into(), position }
    }
}

impl Method for SetStickerPositionInSet {
    const NAME: &'static str = "setStickerPositionInSet";
    type Response = bool;
}

/// Delete a sticker from its set.
#[derive(Clone, Debug, Serialize)]
pub struct DeleteStickerFromSet {
    /// File identifier of the sticker.
    pub sticker: String,
}

impl DeleteStickerFromSet {
    pub fn new(sticker: impl Into<String>) -> Self {
        Self { sticker: sticker.into() }
    }
}

impl Method for DeleteStickerFromSet {
    const NAME: &'static str = "deleteStickerFromSet";
    type Response = bool;
}

/// Set or clear the thumbnail of a sticker set.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SetStickerSetThumb {
    pub name: String,
    pub user_id: i64,
    /// Omit to drop the thumbnail.
    pub thumb: Option<InputFile>,
}

impl SetStickerSetThumb {
    pub fn new(name: impl Into<String>, user_id: i64) -> Self {
        Self { name: name.into(), user_id, thumb: None }
    }

    optional_setters! {
        thumb: InputFile,
    }
}

impl Method for SetStickerSetThumb {
    const NAME: &'static str = "setStickerSetThumb";
    type Response = bool;
}
