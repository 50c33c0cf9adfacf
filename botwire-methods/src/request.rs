//! Turning a typed method struct into the `(name, params)` pair the
//! transport needs.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

// ─── Error ───────────────────────────────────────────────────────────────────

/// Errors that can occur while assembling a [`Request`].
#[derive(Debug)]
pub enum Error {
    /// The method struct serialized to something other than a JSON
    /// object. Cannot happen for the builders in this crate; guards
    /// foreign [`Method`] impls.
    NotAnObject { method: &'static str },
    /// A parameter failed to serialize.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { method } => {
                write!(f, "method `{method}` did not serialize to a JSON object")
            }
            Self::Json(e) => write!(f, "parameter serialization failed: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Specialized `Result` for request assembly.
pub type Result<T> = std::result::Result<T, Error>;

// ─── Method ──────────────────────────────────────────────────────────────────

/// A Bot API method: a serializable parameter set with a wire name and a
/// response type.
pub trait Method: Serialize {
    /// The wire name, e.g. `"sendMessage"`.
    const NAME: &'static str;
    /// What Telegram returns inside the response envelope.
    type Response: DeserializeOwned;

    /// Assemble the wire-ready `(name, params)` pair.
    fn into_request(self) -> Result<Request>
    where
        Self: Sized,
    {
        Request::new(&self)
    }
}

// ─── Request ─────────────────────────────────────────────────────────────────

/// A method name plus its parameter mapping; everything the transport
/// layer needs to POST the call.
///
/// The mapping never contains `null` entries: optional parameters left
/// unset are absent, not null.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: &'static str,
    pub params: Map<String, Value>,
}

impl Request {
    /// Serialize `method`'s parameters into a mapping.
    ///
    /// Absent optionals are already omitted at the serde level; any
    /// null that slips through (a hand-written `Method` impl, say) is
    /// stripped here so the no-null contract holds unconditionally.
    pub fn new<M: Method>(method: &M) -> Result<Self> {
        let mut params = match serde_json::to_value(method)? {
            Value::Object(map) => map,
            _ => return Err(Error::NotAnObject { method: M::NAME }),
        };
        params.retain(|_, value| !value.is_null());
        tracing::trace!(
            method = M::NAME,
            params = params.len(),
            "assembled request"
        );
        Ok(Self { method: M::NAME, params })
    }
}

// ─── Builder plumbing ────────────────────────────────────────────────────────

/// Generates one chainable setter per optional parameter.
macro_rules! optional_setters {
    ($( $(#[$meta:meta])* $field:ident: $ty:ty ),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $field(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

pub(crate) use optional_setters;
