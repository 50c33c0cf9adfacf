//! Small scalar-ish types shared across the whole API surface.

use serde::{Deserialize, Serialize};

use crate::one_of::one_of;

one_of! {
    /// Unique identifier for the target chat, or the `@username` of the
    /// target channel.
    pub enum ChatId {
        Id(i64),
        Username(String),
    }
}

impl From<&str> for ChatId {
    fn from(value: &str) -> Self {
        ChatId::Username(value.to_owned())
    }
}

/// The contents of a file to be sent.
///
/// Only by-reference forms live at this layer: a `file_id` already known
/// to Telegram, an HTTP URL, or an `attach://<name>` pointer into a
/// multipart body assembled by the transport. All three encode as a plain
/// JSON string, so decoding collapses to the first variant; the
/// distinction only matters on the way out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputFile {
    /// A file identifier taken from a previous response.
    FileId(String),
    /// An HTTP URL for Telegram to fetch.
    Url(String),
    /// Reference to a named part of a multipart/form-data body.
    Attach(String),
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        InputFile::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        InputFile::Url(url.into())
    }

    /// `attach://<name>` reference to a part the transport will upload.
    pub fn attach(name: &str) -> Self {
        InputFile::Attach(format!("attach://{name}"))
    }
}

/// Text formatting mode for captions and message bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

/// Chat action shown to the peer while the bot prepares a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}
