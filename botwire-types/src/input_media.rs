//! Media to be sent: the `InputMedia` union and its five shapes.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::one_of::one_of;
use crate::primitives::{InputFile, ParseMode};

one_of! {
    /// The content of a media message to be sent.
    ///
    /// All five shapes share the single required field `media`, so shape
    /// alone cannot tell them apart: the first candidate in this order
    /// that accepts the payload wins. Re-decoding a value that was
    /// encoded with only `type` and `media` set therefore lands on
    /// [`InputMediaAnimation`] regardless of its `type` string.
    pub enum InputMedia {
        Animation(InputMediaAnimation),
        Document(InputMediaDocument),
        Audio(InputMediaAudio),
        Photo(InputMediaPhoto),
        Video(InputMediaVideo),
    }
}

/// A photo to be sent.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    /// Always `photo`.
    #[serde(rename = "type")]
    pub kind: String,
    pub media: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
}

impl InputMediaPhoto {
    pub fn new(media: InputFile) -> Self {
        Self {
            kind: "photo".to_owned(),
            media,
            caption: None,
            parse_mode: None,
        }
    }
}

/// A video to be sent.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    /// Always `video`.
    #[serde(rename = "type")]
    pub kind: String,
    pub media: InputFile,
    pub thumb: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub duration: Option<i64>,
    pub supports_streaming: Option<bool>,
}

impl InputMediaVideo {
    pub fn new(media: InputFile) -> Self {
        Self {
            kind: "video".to_owned(),
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        }
    }
}

/// An animation (GIF or soundless video) to be sent.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    /// Always `animation`.
    #[serde(rename = "type")]
    pub kind: String,
    pub media: InputFile,
    pub thumb: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub duration: Option<i64>,
}

impl InputMediaAnimation {
    pub fn new(media: InputFile) -> Self {
        Self {
            kind: "animation".to_owned(),
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
        }
    }
}

/// An audio file to be sent.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    /// Always `audio`.
    #[serde(rename = "type")]
    pub kind: String,
    pub media: InputFile,
    pub thumb: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub duration: Option<i64>,
    pub performer: Option<String>,
    pub title: Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: InputFile) -> Self {
        Self {
            kind: "audio".to_owned(),
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
            duration: None,
            performer: None,
            title: None,
        }
    }
}

/// A general file to be sent.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    /// Always `document`.
    #[serde(rename = "type")]
    pub kind: String,
    pub media: InputFile,
    pub thumb: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
}

impl InputMediaDocument {
    pub fn new(media: InputFile) -> Self {
        Self {
            kind: "document".to_owned(),
            media,
            thumb: None,
            caption: None,
            parse_mode: None,
        }
    }
}
