//! Telegram Bot API request builders.
//!
//! One struct per API method. Each builder is a pure value constructor:
//! `new(required…)` plus chainable setters for the optionals, and
//! [`Method::into_request`] to assemble the `(name, params)` pair a
//! transport layer POSTs. Nothing here performs I/O.
//!
//! Optional parameters left unset are *absent* from the mapping, never
//! `null`.
//!
//! # Overview
//!
//! | Module       | Methods                                              |
//! |--------------|------------------------------------------------------|
//! | [`updates`]  | getUpdates, webhook management                       |
//! | [`send`]     | sendMessage and the other send* methods              |
//! | [`chats`]    | chat management, moderation, getMe, commands         |
//! | [`editing`]  | editMessage*, stopPoll, deleteMessage                |
//! | [`stickers`] | sticker sending and set management                   |
//! | [`inline`]   | answerInlineQuery                                    |
//! | [`payments`] | sendInvoice and the payment queries                  |
//! | [`passport`] | setPassportDataErrors                                |
//! | [`games`]    | sendGame, scores                                     |
//!
//! # Example
//!
//! ```
//! use botwire_methods::{Method, send::SendMessage};
//! use botwire_types::ParseMode;
//!
//! let request = SendMessage::new(12345, "*hi*")
//!     .parse_mode(ParseMode::MarkdownV2)
//!     .into_request()
//!     .unwrap();
//!
//! assert_eq!(request.method, "sendMessage");
//! assert!(request.params.contains_key("text"));
//! // Unset optionals are not in the mapping at all.
//! assert!(!request.params.contains_key("reply_markup"));
//! ```

#![deny(unsafe_code)]

mod request;

pub mod chats;
pub mod editing;
pub mod games;
pub mod inline;
pub mod passport;
pub mod payments;
pub mod send;
pub mod stickers;
pub mod updates;

pub use request::{Error, Method, Request, Result};
