//! # botwire
//!
//! A typed binding for the Telegram Bot HTTP API: every API object as a
//! serde struct ([`types`]) and every API method as a pure request
//! builder ([`methods`]). There is no HTTP client here; a builder
//! yields a [`methods::Request`] (method name + parameter mapping) and
//! the transport of your choice does the POST and feeds the response
//! envelope back through [`types::ApiResponse`].
//!
//! ```no_run
//! use botwire::methods::{Method, send::SendMessage};
//! use botwire::types::{ApiResponse, Message};
//!
//! let request = SendMessage::new("@durov", "hello").into_request()?;
//! // hand `request.method` + `request.params` to your HTTP layer…
//! # let body = "{}";
//! let response: ApiResponse<Message> = serde_json::from_str(body)?;
//! let message = response.into_result()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]

pub use botwire_methods as methods;
pub use botwire_types as types;
