//! Incoming updates and webhook status.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::inline::{ChosenInlineResult, InlineQuery};
use crate::keyboards::CallbackQuery;
use crate::message::{Message, Poll, PollAnswer};
use crate::payments::{PreCheckoutQuery, ShippingQuery};

/// An incoming update. At most one of the optional fields is present in
/// any given update.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// Monotonically increasing update identifier.
    pub update_id: i64,
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
    pub edited_channel_post: Option<Message>,
    pub inline_query: Option<InlineQuery>,
    pub chosen_inline_result: Option<ChosenInlineResult>,
    pub callback_query: Option<CallbackQuery>,
    pub shipping_query: Option<ShippingQuery>,
    pub pre_checkout_query: Option<PreCheckoutQuery>,
    pub poll: Option<Poll>,
    pub poll_answer: Option<PollAnswer>,
}

/// Update kinds a bot can subscribe to via `allowed_updates`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowedUpdate {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    InlineQuery,
    ChosenInlineResult,
    CallbackQuery,
    ShippingQuery,
    PreCheckoutQuery,
    Poll,
    PollAnswer,
}

/// Current webhook status.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Webhook URL; empty if no webhook is set up.
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    /// Unix time of the most recent delivery error.
    pub last_error_date: Option<i64>,
    pub last_error_message: Option<String>,
    pub max_connections: Option<i64>,
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}
