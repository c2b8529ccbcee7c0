//! Shared plumbing for the dual-shape JSON codec.
//!
//! Decoding goes through [`serde::Deserializer::deserialize_any`], so the
//! deserializer peeks at the first significant token and the visitor picks the
//! legacy string path or the structured path from that. Visitors produce a
//! [`Decoded`] value: malformed JSON is reported through the deserializer's own
//! error type, while version-level failures are carried as [`Error`] so callers of
//! `from_json` can match on them.

use std::fmt;

use serde::{
    Serialize, Serializer,
    de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

use crate::Error;

pub(crate) type Decoded<T> = Result<T, Error>;

/// Decodes one complete JSON document with a shape-detecting visitor.
pub(crate) fn decode<'de, T, V>(json: &'de [u8], visitor: V) -> Result<T, Error>
where
    V: Visitor<'de, Value = Decoded<T>>,
{
    let mut deserializer = serde_json::Deserializer::from_slice(json);
    let decoded = Shaped(visitor).deserialize(&mut deserializer)?;
    deserializer.end()?;
    decoded
}

/// Runs `V` without a type hint so it sees whatever the payload starts with.
pub(crate) struct Shaped<V>(pub V);

impl<'de, V: Visitor<'de>> DeserializeSeed<'de> for Shaped<V> {
    type Value = V::Value;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(self.0)
    }
}

/// The content of a legacy string payload, or `None` when it denotes a null value.
///
/// `""` and `"null"` are both written by older producers for "no version".
pub(crate) fn legacy_payload(s: &str) -> Option<&str> {
    match s {
        "" | "null" => None,
        s => Some(s),
    }
}

pub(crate) fn framing(target: &'static str, expected: &'static str, found: impl fmt::Display) -> Error {
    Error::JsonFraming {
        target,
        expected,
        found: found.to_string(),
    }
}

// The visitor has already decided to fail; consume the rest of the container so
// the deserializer does not report the leftover tokens instead.
pub(crate) fn skip_map<'de, A: MapAccess<'de>>(map: &mut A) -> Result<(), A::Error> {
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(())
}

pub(crate) fn skip_seq<'de, A: SeqAccess<'de>>(seq: &mut A) -> Result<(), A::Error> {
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}

/// Writes an empty sequence as `null`.
pub(crate) fn serialize_nullable_seq<S, T>(items: &[T], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    if items.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.collect_seq(items)
    }
}
