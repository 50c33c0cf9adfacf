//! Invoices and the two payment queries that must be answered quickly.

use botwire_types::{InlineKeyboardMarkup, LabeledPrice, Message, ShippingOption};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Send an invoice. Payments only work in private chats, so `chat_id`
/// is numeric here.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct SendInvoice {
    pub chat_id: i64,
    pub title: String,
    pub description: String,
    /// Bot-internal payload, 1-128 bytes; not shown to the user.
    pub payload: String,
    /// Token from BotFather's payment provider setup.
    pub provider_token: String,
    pub start_parameter: String,
    /// Three-letter ISO 4217 code.
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    /// JSON blob forwarded verbatim to the payment provider.
    pub provider_data: Option<String>,
    pub photo_url: Option<String>,
    pub photo_size: Option<i64>,
    pub photo_width: Option<i64>,
    pub photo_height: Option<i64>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,
    /// The final price depends on the chosen shipping method.
    pub is_flexible: Option<bool>,
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<i64>,
    /// Must contain a Pay button as its first button if set.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl SendInvoice {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        chat_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        provider_token: impl Into<String>,
        start_parameter: impl Into<String>,
        currency: impl Into<String>,
        prices: Vec<LabeledPrice>,
    ) -> Self {
        Self {
            chat_id,
            title: title.into(),
            description: description.into(),
            payload: payload.into(),
            provider_token: provider_token.into(),
            start_parameter: start_parameter.into(),
            currency: currency.into(),
            prices,
            provider_data: None,
            photo_url: None,
            photo_size: None,
            photo_width: None,
            photo_height: None,
            need_name: None,
            need_phone_number: None,
            need_email: None,
            need_shipping_address: None,
            send_phone_number_to_provider: None,
            send_email_to_provider: None,
            is_flexible: None,
            disable_notification: None,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    optional_setters! {
        provider_data: String,
        photo_url: String,
        photo_size: i64,
        photo_width: i64,
        photo_height: i64,
        need_name: bool,
        need_phone_number: bool,
        need_email: bool,
        need_shipping_address: bool,
        send_phone_number_to_provider: bool,
        send_email_to_provider: bool,
        is_flexible: bool,
        disable_notification: bool,
        reply_to_message_id: i64,
        reply_markup: InlineKeyboardMarkup,
    }
}

impl Method for SendInvoice {
    const NAME: &'static str = "sendInvoice";
    type Response = Message;
}

/// Reply to a shipping query.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct AnswerShippingQuery {
    pub shipping_query_id: String,
    pub ok: bool,
    /// Required if `ok` is `true`.
    pub shipping_options: Option<Vec<ShippingOption>>,
    /// Required if `ok` is `false`; shown to the user.
    pub error_message: Option<String>,
}

impl AnswerShippingQuery {
    /// Delivery is possible; offer these options.
    pub fn ok(shipping_query_id: impl Into<String>, options: Vec<ShippingOption>) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: true,
            shipping_options: Some(options),
            error_message: None,
        }
    }

    /// Delivery is impossible; explain why.
    pub fn error(
        shipping_query_id: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            shipping_query_id: shipping_query_id.into(),
            ok: false,
            shipping_options: None,
            error_message: Some(error_message.into()),
        }
    }
}

impl Method for AnswerShippingQuery {
    const NAME: &'static str = "answerShippingQuery";
    type Response = bool;
}

/// Confirm or reject the final checkout; must be sent within 10
/// seconds of the query arriving.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct AnswerPreCheckoutQuery {
    pub pre_checkout_query_id: String,
    pub ok: bool,
    /// Required if `ok` is `false`; shown to the user.
    pub error_message: Option<String>,
}

impl AnswerPreCheckoutQuery {
    pub fn ok(pre_checkout_query_id: impl Into<String>) -> Self {
        Self {
            pre_checkout_query_id: pre_checkout_query_id.into(),
            ok: true,
            error_message: None,
        }
    }

    pub fn error(
        pre_checkout_query_id: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            pre_checkout_query_id: pre_checkout_query_id.into(),
            ok: false,
            error_message: Some(error_message.into()),
        }
    }
}

impl Method for AnswerPreCheckoutQuery {
    const NAME: &'static str = "answerPreCheckoutQuery";
    type Response = bool;
}
