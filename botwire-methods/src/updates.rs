//! Receiving updates: long polling and webhook management.

use botwire_types::{AllowedUpdate, InputFile, Update, WebhookInfo};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Receive incoming updates via long polling.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetUpdates {
    /// Identifier of the first update to return; set it to the highest
    /// seen `update_id + 1` to confirm earlier updates.
    pub offset: Option<i64>,
    /// 1-100, defaults to 100 server-side.
    pub limit: Option<i64>,
    /// Long-polling timeout in seconds; 0 means short polling.
    pub timeout: Option<i64>,
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl GetUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    optional_setters! {
        offset: i64,
        limit: i64,
        timeout: i64,
        allowed_updates: Vec<AllowedUpdate>,
    }
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";
    type Response = Vec<Update>;
}

/// Tell Telegram to deliver updates to an HTTPS URL instead.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SetWebhook {
    pub url: String,
    /// Public key certificate, for self-signed setups.
    pub certificate: Option<InputFile>,
    /// 1-100 simultaneous deliveries, defaults to 40 server-side.
    pub max_connections: Option<i64>,
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            certificate: None,
            max_connections: None,
            allowed_updates: None,
        }
    }

    optional_setters! {
        certificate: InputFile,
        max_connections: i64,
        allowed_updates: Vec<AllowedUpdate>,
    }
}

impl Method for SetWebhook {
    const NAME: &'static str = "setWebhook";
    type Response = bool;
}

/// Remove the webhook and go back to `getUpdates`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DeleteWebhook {}

impl DeleteWebhook {
    pub fn new() -> Self {
        Self {}
    }
}

impl Method for DeleteWebhook {
    const NAME: &'static str = "deleteWebhook";
    type Response = bool;
}

/// Current webhook status.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GetWebhookInfo {}

impl GetWebhookInfo {
    pub fn new() -> Self {
        Self {}
    }
}

impl Method for GetWebhookInfo {
    const NAME: &'static str = "getWebhookInfo";
    type Response = WebhookInfo;
}
