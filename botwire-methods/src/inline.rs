//! Answering inline queries.

use botwire_types::InlineQueryResult;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::request::{Method, optional_setters};

/// Send the result list for an inline query. No more than 50 results.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,
    /// Server-side cache time in seconds, defaults to 300.
    pub cache_time: Option<i64>,
    /// Cache per-user instead of globally.
    pub is_personal: Option<bool>,
    /// Pagination token for the next query; empty means no more results.
    pub next_offset: Option<String>,
    /// Label of a switch-to-PM button shown above the results.
    pub switch_pm_text: Option<String>,
    /// Deep-link start parameter for that button.
    pub switch_pm_parameter: Option<String>,
}

impl AnswerInlineQuery {
    pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results,
            cache_time: None,
            is_personal: None,
            next_offset: None,
            switch_pm_text: None,
            switch_pm_parameter: None,
        }
    }

    optional_setters! {
        cache_time: i64,
        is_personal: bool,
        next_offset: String,
        switch_pm_text: String,
        switch_pm_parameter: String,
    }
}

impl Method for AnswerInlineQuery {
    const NAME: &'static str = "answerInlineQuery";
    type Response = bool;
}
