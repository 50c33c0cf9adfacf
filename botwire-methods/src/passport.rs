//! Reporting Telegram Passport validation errors back to the user.

use botwire_types::PassportElementError;
use serde::Serialize;

use crate::request::Method;

/// Tell the user which passport elements need to be re-submitted. The
/// user cannot re-share an element until its error is resolved.
#[derive(Clone, Debug, Serialize)]
pub struct SetPassportDataErrors {
    pub user_id: i64,
    pub errors: Vec<PassportElementError>,
}

impl SetPassportDataErrors {
    pub fn new(user_id: i64, errors: Vec<PassportElementError>) -> Self {
        Self { user_id, errors }
    }
}

impl Method for SetPassportDataErrors {
    const NAME: &'static str = "setPassportDataErrors";
    type Response = bool;
}
