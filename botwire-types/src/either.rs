//! Two-candidate unions: a thumbnail that is either an upload reference or
//! a plain string, a method that returns either a `Message` or `True`.

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::one_of::NoMatch;

/// Exactly one of two values.
///
/// Decoding tries `A` first, then `B`; the first shape whose required
/// fields are all present wins (see [`crate::one_of`] for why). Encoding
/// writes the held value alone, so `Either::Left(x)` and `x` produce
/// byte-identical JSON.
#[derive(Clone, Debug, PartialEq)]
pub enum Either<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> Either<A, B> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, if held.
    pub fn left(self) -> Option<A> {
        match self {
            Either::Left(a) => Some(a),
            Either::Right(_) => None,
        }
    }

    /// The right value, if held.
    pub fn right(self) -> Option<B> {
        match self {
            Either::Left(_) => None,
            Either::Right(b) => Some(b),
        }
    }
}

impl<A: Serialize, B: Serialize> Serialize for Either<A, B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Either::Left(a) => a.serialize(serializer),
            Either::Right(b) => b.serialize(serializer),
        }
    }
}

impl<'de, A, B> Deserialize<'de> for Either<A, B>
where
    A: DeserializeOwned,
    B: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if let Ok(a) = serde_json::from_value::<A>(value.clone()) {
            return Ok(Either::Left(a));
        }
        if let Ok(b) = serde_json::from_value::<B>(value.clone()) {
            return Ok(Either::Right(b));
        }
        tracing::debug!(union = "Either", "no candidate shape matched");
        Err(serde::de::Error::custom(NoMatch {
            union: "Either",
            candidates: vec![type_name::<A>(), type_name::<B>()],
            input: value,
        }))
    }
}
