//! Stickers and sticker sets.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::media::PhotoSize;

/// A sticker.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    pub is_animated: bool,
    pub thumb: Option<PhotoSize>,
    pub emoji: Option<String>,
    /// Name of the set the sticker belongs to.
    pub set_name: Option<String>,
    /// For mask stickers: where to place the mask.
    pub mask_position: Option<MaskPosition>,
    pub file_size: Option<i64>,
}

/// A sticker set.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub is_animated: bool,
    pub contains_masks: bool,
    pub stickers: Vec<Sticker>,
    pub thumb: Option<PhotoSize>,
}

/// Where a mask should be placed on a face, relative to facial features.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    /// `forehead`, `eyes`, `mouth` or `chin`.
    pub point: String,
    /// X shift in face widths; -1.0 to 1.0.
    pub x_shift: f64,
    /// Y shift in face heights; -1.0 to 1.0.
    pub y_shift: f64,
    pub scale: f64,
}
