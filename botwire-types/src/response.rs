//! The `{ok, result | description}` envelope every Bot API call returns.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The raw response envelope.
///
/// On success `ok` is `true` and `result` carries the method's return
/// value; on failure `ok` is `false` and `description`/`error_code`
/// explain why. [`into_result`] collapses the envelope into an ordinary
/// `Result`.
///
/// [`into_result`]: ApiResponse::into_result
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
    pub parameters: Option<ResponseParameters>,
}

impl<T> ApiResponse<T> {
    /// Collapse the envelope: the result on success, an [`ApiError`]
    /// otherwise.
    ///
    /// An `ok: true` envelope with no `result` is treated as an error
    /// rather than silently conjuring a value.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            (true, None) => Err(ApiError {
                description: "ok response carried no result".to_owned(),
                error_code: None,
                parameters: self.parameters,
            }),
            (false, _) => Err(ApiError {
                description: self
                    .description
                    .unwrap_or_else(|| "unknown error".to_owned()),
                error_code: self.error_code,
                parameters: self.parameters,
            }),
        }
    }
}

/// Extra recovery hints Telegram attaches to some failures.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group migrated to a supergroup with this identifier.
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before retrying, on flood control.
    pub retry_after: Option<i64>,
}

/// A failed Bot API call, as reported inside the envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub description: String,
    /// HTTP-like status code; its contents are not stable across calls.
    pub error_code: Option<i64>,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Seconds to wait before retrying, if this is a flood-control error.
    pub fn retry_after(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.retry_after)
    }

    /// The supergroup id to redirect to, if the chat migrated.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.migrate_to_chat_id)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_code {
            Some(code) => write!(f, "API error {code}: {}", self.description)?,
            None => write!(f, "API error: {}", self.description)?,
        }
        if let Some(seconds) = self.retry_after() {
            write!(f, " (retry after {seconds}s)")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
