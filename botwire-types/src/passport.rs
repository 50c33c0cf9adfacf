//! Telegram Passport: encrypted identity data and validation errors.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::one_of::one_of;

/// Passport data shared with the bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport; encrypted with a credentials
/// key before upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    /// Unix time the file was uploaded.
    pub file_date: i64,
}

/// One element of the shared passport data.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    /// `personal_details`, `passport`, `driver_license`, `identity_card`,
    /// `internal_passport`, `address`, `utility_bill`, `bank_statement`,
    /// `rental_agreement`, `passport_registration`,
    /// `temporary_registration`, `phone_number` or `email`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Base64-encoded encrypted data, for data-carrying kinds.
    pub data: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub files: Option<Vec<PassportFile>>,
    pub front_side: Option<PassportFile>,
    pub reverse_side: Option<PassportFile>,
    pub selfie: Option<PassportFile>,
    pub translation: Option<Vec<PassportFile>>,
    /// Base64-encoded hash, for `setPassportDataErrors`.
    pub hash: String,
}

/// Credentials required to decrypt [`EncryptedPassportElement`] data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    /// Secret, encrypted with the bot's public key.
    pub secret: String,
}

one_of! {
    /// An error in a passport element, reported back to the user.
    ///
    /// Discrimination is by shape and the shapes barely differ: the five
    /// single-file variants share the exact required field set
    /// (`source`, `type`, `file_hash`, `message`), as do the two
    /// multi-file ones. Decoding such a payload always lands on the
    /// earliest of the identically-shaped candidates; only the `source`
    /// string the sender filled in distinguishes them on the wire.
    pub enum PassportElementError {
        DataField(PassportElementErrorDataField),
        FrontSide(PassportElementErrorFrontSide),
        ReverseSide(PassportElementErrorReverseSide),
        Selfie(PassportElementErrorSelfie),
        File(PassportElementErrorFile),
        Files(PassportElementErrorFiles),
        TranslationFile(PassportElementErrorTranslationFile),
        TranslationFiles(PassportElementErrorTranslationFiles),
        Unspecified(PassportElementErrorUnspecified),
    }
}

/// A data field failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorDataField {
    /// Always `data`.
    pub source: String,
    /// Kind of the element the error is in.
    #[serde(rename = "type")]
    pub kind: String,
    pub field_name: String,
    pub data_hash: String,
    pub message: String,
}

impl PassportElementErrorDataField {
    pub fn new(
        kind: impl Into<String>,
        field_name: impl Into<String>,
        data_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "data".to_owned(),
            kind: kind.into(),
            field_name: field_name.into(),
            data_hash: data_hash.into(),
            message: message.into(),
        }
    }
}

/// The front side scan failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorFrontSide {
    /// Always `front_side`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

impl PassportElementErrorFrontSide {
    pub fn new(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "front_side".to_owned(),
            kind: kind.into(),
            file_hash: file_hash.into(),
            message: message.into(),
        }
    }
}

/// The reverse side scan failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorReverseSide {
    /// Always `reverse_side`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

impl PassportElementErrorReverseSide {
    pub fn new(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "reverse_side".to_owned(),
            kind: kind.into(),
            file_hash: file_hash.into(),
            message: message.into(),
        }
    }
}

/// The selfie failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorSelfie {
    /// Always `selfie`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

impl PassportElementErrorSelfie {
    pub fn new(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "selfie".to_owned(),
            kind: kind.into(),
            file_hash: file_hash.into(),
            message: message.into(),
        }
    }
}

/// A document scan failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorFile {
    /// Always `file`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

impl PassportElementErrorFile {
    pub fn new(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "file".to_owned(),
            kind: kind.into(),
            file_hash: file_hash.into(),
            message: message.into(),
        }
    }
}

/// A whole list of document scans failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorFiles {
    /// Always `files`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hashes: Vec<String>,
    pub message: String,
}

impl PassportElementErrorFiles {
    pub fn new(
        kind: impl Into<String>,
        file_hashes: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "files".to_owned(),
            kind: kind.into(),
            file_hashes,
            message: message.into(),
        }
    }
}

/// One translation file failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFile {
    /// Always `translation_file`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

impl PassportElementErrorTranslationFile {
    pub fn new(
        kind: impl Into<String>,
        file_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "translation_file".to_owned(),
            kind: kind.into(),
            file_hash: file_hash.into(),
            message: message.into(),
        }
    }
}

/// The whole translation set failed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFiles {
    /// Always `translation_files`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hashes: Vec<String>,
    pub message: String,
}

impl PassportElementErrorTranslationFiles {
    pub fn new(
        kind: impl Into<String>,
        file_hashes: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "translation_files".to_owned(),
            kind: kind.into(),
            file_hashes,
            message: message.into(),
        }
    }
}

/// An error in an element that no other variant describes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorUnspecified {
    /// Always `unspecified`.
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub element_hash: String,
    pub message: String,
}

impl PassportElementErrorUnspecified {
    pub fn new(
        kind: impl Into<String>,
        element_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: "unspecified".to_owned(),
            kind: kind.into(),
            element_hash: element_hash.into(),
            message: message.into(),
        }
    }
}
