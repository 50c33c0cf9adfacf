//! Chat management, membership moderation and bot identity.

use botwire_types::{
    BotCommand, Chat, ChatId, ChatMember, ChatPermissions, File, InputFile, User,
    UserProfilePhotos,
};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Basic information about the bot itself.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMe {}

impl GetMe {
    pub fn new() -> Self {
        Self {}
    }
}

impl Method for GetMe {
    const NAME: &'static str = "getMe";
    type Response = User;
}

/// A user's profile pictures.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    /// Sequential number of the first photo to return.
    pub offset: Option<i64>,
    /// 1-100, defaults to 100 server-side.
    pub limit: Option<i64>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self { user_id, offset: None, limit: None }
    }

    optional_setters! {
        offset: i64,
        limit: i64,
    }
}

impl Method for GetUserProfilePhotos {
    const NAME: &'static str = "getUserProfilePhotos";
    type Response = UserProfilePhotos;
}

/// Basic information about a file, including a download path.
#[derive(Clone, Debug, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self { file_id: file_id.into() }
    }
}

impl Method for GetFile {
    const NAME: &'static str = "getFile";
    type Response = File;
}

/// Kick a user from a group, supergroup or channel.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct KickChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Unix time; banned forever if more than 366 days away or less
    /// than 30 seconds away.
    pub until_date: Option<i64>,
}

impl KickChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id, until_date: None }
    }

    optional_setters! {
        until_date: i64,
    }
}

impl Method for KickChatMember {
    const NAME: &'static str = "kickChatMember";
    type Response = bool;
}

/// Lift a ban, letting the user join again.
#[derive(Clone, Debug, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl UnbanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id }
    }
}

impl Method for UnbanChatMember {
    const NAME: &'static str = "unbanChatMember";
    type Response = bool;
}

/// Restrict a supergroup member. Pass all-true permissions to lift.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    pub until_date: Option<i64>,
}

impl RestrictChatMember {
    pub fn new(
        chat_id: impl Into<ChatId>,
        user_id: i64,
        permissions: ChatPermissions,
    ) -> Self {
        Self { chat_id: chat_id.into(), user_id, permissions, until_date: None }
    }

    optional_setters! {
        until_date: i64,
    }
}

impl Method for RestrictChatMember {
    const NAME: &'static str = "restrictChatMember";
    type Response = bool;
}

/// Promote or demote a chat member. Pass no flags to demote.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub can_change_info: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_pin_messages: Option<bool>,
    /// The promotee can in turn promote, limited to their own rights.
    pub can_promote_members: Option<bool>,
}

impl PromoteChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            can_change_info: None,
            can_post_messages: None,
            can_edit_messages: None,
            can_delete_messages: None,
            can_invite_users: None,
            can_restrict_members: None,
            can_pin_messages: None,
            can_promote_members: None,
        }
    }

    optional_setters! {
        can_change_info: bool,
        can_post_messages: bool,
        can_edit_messages: bool,
        can_delete_messages: bool,
        can_invite_users: bool,
        can_restrict_members: bool,
        can_pin_messages: bool,
        can_promote_members: bool,
    }
}

impl Method for PromoteChatMember {
    const NAME: &'static str = "promoteChatMember";
    type Response = bool;
}

/// Set a custom title for an administrator the bot promoted.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatAdministratorCustomTitle {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// 0-16 characters, no emoji.
    pub custom_title: String,
}

impl SetChatAdministratorCustomTitle {
    pub fn new(
        chat_id: impl Into<ChatId>,
        user_id: i64,
        custom_title: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            custom_title: custom_title.into(),
        }
    }
}

impl Method for SetChatAdministratorCustomTitle {
    const NAME: &'static str = "setChatAdministratorCustomTitle";
    type Response = bool;
}

/// Set default permissions for all members of a group or supergroup.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatPermissions {
    pub chat_id: ChatId,
    pub permissions: ChatPermissions,
}

impl SetChatPermissions {
    pub fn new(chat_id: impl Into<ChatId>, permissions: ChatPermissions) -> Self {
        Self { chat_id: chat_id.into(), permissions }
    }
}

impl Method for SetChatPermissions {
    const NAME: &'static str = "setChatPermissions";
    type Response = bool;
}

/// Generate a new primary invite link; the previous one stops working.
#[derive(Clone, Debug, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: ChatId,
}

impl ExportChatInviteLink {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for ExportChatInviteLink {
    const NAME: &'static str = "exportChatInviteLink";
    type Response = String;
}

/// Set a new chat photo.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
}

impl SetChatPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self { chat_id: chat_id.into(), photo }
    }
}

impl Method for SetChatPhoto {
    const NAME: &'static str = "setChatPhoto";
    type Response = bool;
}

/// Delete the chat photo.
#[derive(Clone, Debug, Serialize)]
pub struct DeleteChatPhoto {
    pub chat_id: ChatId,
}

impl DeleteChatPhoto {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for DeleteChatPhoto {
    const NAME: &'static str = "deleteChatPhoto";
    type Response = bool;
}

/// Change the chat title.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    /// 1-255 characters.
    pub title: String,
}

impl SetChatTitle {
    pub fn new(chat_id: impl Into<ChatId>, title: impl Into<String>) -> Self {
        Self { chat_id: chat_id.into(), title: title.into() }
    }
}

impl Method for SetChatTitle {
    const NAME: &'static str = "setChatTitle";
    type Response = bool;
}

/// Change the chat description.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    /// 0-255 characters; omit to clear.
    pub description: Option<String>,
}

impl SetChatDescription {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into(), description: None }
    }

    optional_setters! {
        description: String,
    }
}

impl Method for SetChatDescription {
    const NAME: &'static str = "setChatDescription";
    type Response = bool;
}

/// Pin a message in the chat.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    pub disable_notification: Option<bool>,
}

impl PinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }

    optional_setters! {
        disable_notification: bool,
    }
}

impl Method for PinChatMessage {
    const NAME: &'static str = "pinChatMessage";
    type Response = bool;
}

/// Unpin the currently pinned message.
#[derive(Clone, Debug, Serialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
}

impl UnpinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for UnpinChatMessage {
    const NAME: &'static str = "unpinChatMessage";
    type Response = bool;
}

/// Leave a group, supergroup or channel.
#[derive(Clone, Debug, Serialize)]
pub struct LeaveChat {
    pub chat_id: ChatId,
}

impl LeaveChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for LeaveChat {
    const NAME: &'static str = "leaveChat";
    type Response = bool;
}

/// Up-to-date information about one chat.
#[derive(Clone, Debug, Serialize)]
pub struct GetChat {
    pub chat_id: ChatId,
}

impl GetChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for GetChat {
    const NAME: &'static str = "getChat";
    type Response = Chat;
}

/// All administrators of a chat, bots excluded.
#[derive(Clone, Debug, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: ChatId,
}

impl GetChatAdministrators {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for GetChatAdministrators {
    const NAME: &'static str = "getChatAdministrators";
    type Response = Vec<ChatMember>;
}

/// Number of members in a chat.
#[derive(Clone, Debug, Serialize)]
pub struct GetChatMembersCount {
    pub chat_id: ChatId,
}

impl GetChatMembersCount {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for GetChatMembersCount {
    const NAME: &'static str = "getChatMembersCount";
    type Response = i64;
}

/// Information about one member of a chat.
#[derive(Clone, Debug, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl GetChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self { chat_id: chat_id.into(), user_id }
    }
}

impl Method for GetChatMember {
    const NAME: &'static str = "getChatMember";
    type Response = ChatMember;
}

/// Set the group sticker set of a supergroup.
#[derive(Clone, Debug, Serialize)]
pub struct SetChatStickerSet {
    pub chat_id: ChatId,
    pub sticker_set_name: String,
}

impl SetChatStickerSet {
    pub fn new(chat_id: impl Into<ChatId>, sticker_set_name: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker_set_name: sticker_set_name.into(),
        }
    }
}

impl Method for SetChatStickerSet {
    const NAME: &'static str = "setChatStickerSet";
    type Response = bool;
}

/// Remove the group sticker set of a supergroup.
#[derive(Clone, Debug, Serialize)]
pub struct DeleteChatStickerSet {
    pub chat_id: ChatId,
}

impl DeleteChatStickerSet {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self { chat_id: chat_id.into() }
    }
}

impl Method for DeleteChatStickerSet {
    const NAME: &'static str = "deleteChatStickerSet";
    type Response = bool;
}

/// Answer a callback query; the answer shows as a notification or alert.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    /// 0-200 characters.
    pub text: Option<String>,
    /// Show an alert box instead of a top-of-screen notification.
    pub show_alert: Option<bool>,
    /// Game URL or `t.me` deep link; nothing else is allowed.
    pub url: Option<String>,
    /// Client-side cache time in seconds.
    pub cache_time: Option<i64>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            text: None,
            show_alert: None,
            url: None,
            cache_time: None,
        }
    }

    optional_setters! {
        text: String,
        show_alert: bool,
        url: String,
        cache_time: i64,
    }
}

impl Method for AnswerCallbackQuery {
    const NAME: &'static str = "answerCallbackQuery";
    type Response = bool;
}

/// Replace the bot's command list.
#[derive(Clone, Debug, Serialize)]
pub struct SetMyCommands {
    /// At most 100 commands.
    pub commands: Vec<BotCommand>,
}

impl SetMyCommands {
    pub fn new(commands: Vec<BotCommand>) -> Self {
        Self { commands }
    }
}

impl Method for SetMyCommands {
    const NAME: &'static str = "setMyCommands";
    type Response = bool;
}

/// The bot's current command list.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetMyCommands {}

impl GetMyCommands {
    pub fn new() -> Self {
        Self {}
    }
}

impl Method for GetMyCommands {
    const NAME: &'static str = "getMyCommands";
    type Response = Vec<BotCommand>;
}
