//! Telegram Bot API wire types.
//!
//! Every object of the Bot API as a plain serde struct, wire names in
//! snake_case, optional fields as `Option<_>` that are omitted (never
//! `null`) when absent.
//!
//! # Overview
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`one_of`]      | Ordered first-match decoding for untagged unions      |
//! | [`either`]      | [`Either<A, B>`], the two-candidate union             |
//! | [`update`]      | [`Update`], [`WebhookInfo`]                           |
//! | [`message`]     | [`Message`] and everything that nests inside one      |
//! | [`inline`]      | Inline mode: queries, the 19 result shapes            |
//! | [`input_media`] | [`InputMedia`] and its five shapes                    |
//! | [`passport`]    | Telegram Passport data and element errors             |
//! | [`response`]    | The `{ok, result}` envelope and [`ApiError`]          |
//!
//! # Union decoding
//!
//! Telegram leaves its "one of" fields untagged, so unions decode by
//! trying each candidate shape in declared order and taking the first
//! that fits; see [`one_of`] for the exact semantics and their known
//! sharp edge. Encoding writes the held payload alone, with no wrapper
//! and no tag:
//!
//! ```
//! use botwire_types::{Either, InputFile};
//!
//! let tagged = Either::<InputFile, String>::Left(InputFile::file_id("abc"));
//! let bare = InputFile::file_id("abc");
//! assert_eq!(
//!     serde_json::to_string(&tagged).unwrap(),
//!     serde_json::to_string(&bare).unwrap(),
//! );
//! ```

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

pub mod either;
pub mod one_of;

pub mod chat;
pub mod games;
pub mod inline;
pub mod input_media;
pub mod keyboards;
pub mod media;
pub mod message;
pub mod passport;
pub mod payments;
pub mod primitives;
pub mod response;
pub mod stickers;
pub mod update;
pub mod user;

pub use chat::{Chat, ChatMember, ChatPermissions, ChatPhoto};
pub use either::Either;
pub use games::{Game, GameHighScore};
pub use inline::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultAudio, InlineQueryResultCachedAudio, InlineQueryResultCachedDocument,
    InlineQueryResultCachedGif, InlineQueryResultCachedMpeg4Gif, InlineQueryResultCachedPhoto,
    InlineQueryResultCachedSticker, InlineQueryResultCachedVideo, InlineQueryResultCachedVoice,
    InlineQueryResultContact, InlineQueryResultDocument, InlineQueryResultGif,
    InlineQueryResultLocation, InlineQueryResultMpeg4Gif, InlineQueryResultPhoto,
    InlineQueryResultVenue, InlineQueryResultVideo, InlineQueryResultVoice,
    InputContactMessageContent, InputLocationMessageContent, InputMessageContent,
    InputTextMessageContent, InputVenueMessageContent,
};
pub use input_media::{
    InputMedia, InputMediaAnimation, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo,
};
pub use keyboards::{
    CallbackGame, CallbackQuery, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup,
    KeyboardButton, KeyboardButtonPollType, LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove,
    ReplyMarkup,
};
pub use media::{
    Animation, Audio, Document, File, PhotoSize, Video, VideoNote, Voice,
};
pub use message::{
    Contact, Dice, Location, Message, MessageEntity, Poll, PollAnswer, PollOption, Venue,
};
pub use one_of::NoMatch;
pub use passport::{
    EncryptedCredentials, EncryptedPassportElement, PassportData, PassportElementError,
    PassportElementErrorDataField, PassportElementErrorFile, PassportElementErrorFiles,
    PassportElementErrorFrontSide, PassportElementErrorReverseSide, PassportElementErrorSelfie,
    PassportElementErrorTranslationFile, PassportElementErrorTranslationFiles,
    PassportElementErrorUnspecified, PassportFile,
};
pub use payments::{
    Invoice, LabeledPrice, OrderInfo, PreCheckoutQuery, ShippingAddress, ShippingOption,
    ShippingQuery, SuccessfulPayment,
};
pub use primitives::{ChatAction, ChatId, InputFile, ParseMode};
pub use response::{ApiError, ApiResponse, ResponseParameters};
pub use stickers::{MaskPosition, Sticker, StickerSet};
pub use update::{AllowedUpdate, Update, WebhookInfo};
pub use user::{BotCommand, User, UserProfilePhotos};

/// A method that returns either the edited `Message` or, for
/// inline-mode messages the bot does not own, bare `true`.
pub type MessageOrBool = Either<Message, bool>;
