use std::{fmt, ops::Deref, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, SeqAccess, Visitor},
};
use tracing::debug;

use crate::{
    Error, VersionString, json,
    version::VersionStringVisitor,
};

const TARGET: &str = "VersionStrings";

/// A `;`-separated list of versions such as `1.2.3.4;0.1.2.6`.
///
/// Serializes as an array of [`VersionString`] objects, or `null` when empty.
/// Deserializes from that array or from the legacy `;`-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionStrings(Vec<VersionString>);

impl VersionStrings {
    /// Parses every `;`-separated part. Empty parts are errors, not skipped.
    pub fn new(list: impl AsRef<str>) -> Result<Self, Error> {
        let list = list.as_ref();
        list.split(';')
            .enumerate()
            .map(|(index, part)| {
                VersionString::new(part).map_err(|source| Error::MalformedVersionList {
                    index,
                    part: part.into(),
                    list: list.into(),
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Decodes a JSON document holding either shape.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        json::decode(json, VersionStringsVisitor)
    }

    pub fn into_inner(self) -> Vec<VersionString> {
        self.0
    }
}

impl Deref for VersionStrings {
    type Target = [VersionString];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<VersionString>> for VersionStrings {
    fn from(versions: Vec<VersionString>) -> Self {
        Self(versions)
    }
}

impl IntoIterator for VersionStrings {
    type Item = VersionString;
    type IntoIter = std::vec::IntoIter<VersionString>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VersionStrings {
    type Item = &'a VersionString;
    type IntoIter = std::slice::Iter<'a, VersionString>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VersionStrings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, version) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{version}")?;
        }
        Ok(())
    }
}

impl FromStr for VersionStrings {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        VersionStrings::new(s)
    }
}

impl Serialize for VersionStrings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json::serialize_nullable_seq(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for VersionStrings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(VersionStringsVisitor)?
            .map_err(de::Error::custom)
    }
}

struct VersionStringsVisitor;

impl<'de> Visitor<'de> for VersionStringsVisitor {
    type Value = json::Decoded<VersionStrings>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a version list string, null, or an array of VersionString")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        debug!("decoding null VersionStrings");
        Ok(Ok(VersionStrings::default()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        debug!(payload = v, "decoding VersionStrings from legacy string");
        Ok(match json::legacy_payload(v) {
            Some(list) => VersionStrings::new(list),
            None => Ok(VersionStrings::default()),
        })
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        debug!("decoding VersionStrings from array");
        let mut versions = Vec::with_capacity(seq.size_hint().unwrap_or(0));

        while let Some(element) = seq.next_element_seed(json::Shaped(VersionStringVisitor))? {
            match element {
                Ok(version) => versions.push(version),
                Err(err) => {
                    json::skip_seq(&mut seq)?;
                    return Ok(Err(err));
                }
            }
        }

        Ok(Ok(VersionStrings(versions)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        json::skip_map(&mut map)?;
        Ok(Err(json::framing(TARGET, "'['", "delimiter '{'")))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'['", format_args!("bool ({v})"))))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'['", format_args!("number ({v})"))))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'['", format_args!("number ({v})"))))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'['", format_args!("number ({v})"))))
    }
}
