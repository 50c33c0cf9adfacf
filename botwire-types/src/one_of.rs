//! Shape-based decoding for Telegram's untagged "one of" fields.
//!
//! Several Bot API fields hold "one of" a closed set of object shapes
//! (`InlineQueryResult`, `InputMedia`, …) without a reliable discriminant:
//! the JSON carries no wrapper object, and the embedded `type` string is
//! absent or unreliable for some unions. Decoding therefore tries each
//! candidate shape in declared order and takes the first whose required
//! fields are all present and type-correct.
//!
//! First match wins. This is deliberately *not* a best-match heuristic:
//! when one candidate's required fields are a subset of another's, the
//! earlier candidate always wins, even when a later one was intended (a
//! venue payload satisfies the location shape, for example). That
//! fragility is inherent to the upstream API's untagged JSON and is kept
//! bit-for-bit rather than papered over.
//!
//! Encoding is the mirror image: the held payload is written as-is, with
//! no wrapper object and no synthetic tag key.

use std::fmt;

use serde_json::Value;

// ─── NoMatch ─────────────────────────────────────────────────────────────────

/// No candidate shape matched the input.
///
/// Carries the union's type name, every candidate that was attempted (in
/// the order they were tried) and the offending input, so a failing decode
/// can be diagnosed from the error message alone.
#[derive(Clone, Debug)]
pub struct NoMatch {
    /// Name of the union type being decoded, e.g. `"InlineQueryResult"`.
    pub union: &'static str,
    /// Candidate variant names, in attempt order.
    pub candidates: Vec<&'static str>,
    /// The input value that matched none of them.
    pub input: Value,
}

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no variant of `{}` matched the input (tried {}); input: {}",
            self.union,
            self.candidates.join(", "),
            self.input,
        )
    }
}

impl std::error::Error for NoMatch {}

// ─── one_of! ─────────────────────────────────────────────────────────────────

/// Declares a closed union of object shapes with ordered first-match
/// decoding.
///
/// Generates:
/// - the `enum` itself, one tuple variant per candidate;
/// - untagged `Serialize` (the payload alone, no wrapper, no tag);
/// - `Deserialize` that buffers the input and tries each candidate with
///   [`serde_json::from_value`] in declared order, producing a [`NoMatch`]
///   diagnostic when every candidate rejects;
/// - `From<Candidate>` for each payload type.
///
/// Candidate order is load-bearing: it is the decode priority.
macro_rules! one_of {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize)]
        #[serde(untagged)]
        pub enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = ::serde_json::Value::deserialize(deserializer)?;
                $(
                    if let Ok(v) = ::serde_json::from_value::<$ty>(value.clone()) {
                        return Ok($name::$variant(v));
                    }
                )+
                ::tracing::debug!(
                    union = stringify!($name),
                    "no candidate shape matched"
                );
                Err(::serde::de::Error::custom($crate::one_of::NoMatch {
                    union: stringify!($name),
                    candidates: vec![$( stringify!($variant) ),+],
                    input: value,
                }))
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$variant(value)
                }
            }
        )+
    };
}

pub(crate) use one_of;
