//! Chats, membership and permissions.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::message::Message;
use crate::user::User;

/// A chat: private conversation, group, supergroup or channel.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// `private`, `group`, `supergroup` or `channel`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `getChat` only.
    pub photo: Option<ChatPhoto>,
    /// `getChat` only.
    pub description: Option<String>,
    /// `getChat` only.
    pub invite_link: Option<String>,
    /// `getChat` only.
    pub pinned_message: Option<Box<Message>>,
    /// `getChat` only, groups and supergroups.
    pub permissions: Option<ChatPermissions>,
    /// `getChat` only, supergroups.
    pub slow_mode_delay: Option<i64>,
    /// `getChat` only, supergroups.
    pub sticker_set_name: Option<String>,
    /// `getChat` only, supergroups.
    pub can_set_sticker_set: Option<bool>,
}

/// A chat photo, available in two sizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatPhoto {
    /// For downloading the small (160x160) version.
    pub small_file_id: String,
    pub small_file_unique_id: String,
    /// For downloading the big (640x640) version.
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// Actions a non-administrator member is allowed to take in a chat.
///
/// All fields absent means "inherit"; the API treats a missing flag the
/// same as `false` when applying the permission set.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatPermissions {
    pub can_send_messages: Option<bool>,
    pub can_send_media_messages: Option<bool>,
    pub can_send_polls: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
}

/// Information about one member of a chat.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
    pub user: User,
    /// `creator`, `administrator`, `member`, `restricted`, `left` or
    /// `kicked`.
    pub status: String,
    /// Administrators only: custom title.
    pub custom_title: Option<String>,
    /// Restricted and kicked only: when the restriction lifts, Unix time.
    pub until_date: Option<i64>,
    pub can_be_edited: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_promote_members: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
    /// Restricted only: whether the user is a member at all.
    pub is_member: Option<bool>,
    pub can_send_messages: Option<bool>,
    pub can_send_media_messages: Option<bool>,
    pub can_send_polls: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
}
