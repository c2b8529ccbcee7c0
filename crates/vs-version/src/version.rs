use std::{fmt, str::FromStr};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, SeqAccess, Visitor},
};
use tracing::{debug, trace};

use crate::{Error, VersionField, json};

const TARGET: &str = "VersionString";

/// A dot-separated numeric version such as `1.2.3.4`.
///
/// Serializes as `{"Version":..,"Fields":[..],"OrderedVersion":..}`. Deserializes from
/// that object or from the legacy bare-string form; `null`, `""` and `"null"` decode
/// to the null version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionString {
    /// The trimmed source text, empty for the null version.
    pub version: String,
    /// One entry per dot-separated component of `version`.
    #[serde(serialize_with = "json::serialize_nullable_seq")]
    pub fields: Vec<VersionField>,
    /// Reserved: order by the `version` text instead of `fields`. Parsing never sets it.
    pub ordered_version: bool,
}

impl VersionString {
    pub fn new(version: impl AsRef<str>) -> Result<Self, Error> {
        let version = version.as_ref().trim();
        if version.is_empty() {
            return Err(Error::EmptyVersion);
        }

        let fields = version
            .split('.')
            .enumerate()
            .map(|(index, field)| {
                parse_number(field)
                    .map(VersionField::Number)
                    .map_err(|source| Error::MalformedVersion {
                        index,
                        field: field.into(),
                        version: version.into(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        trace!(version, fields = fields.len(), "parsed version string");

        Ok(Self {
            version: version.into(),
            fields,
            ordered_version: false,
        })
    }

    /// Decodes a JSON document holding either shape.
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        json::decode(json, VersionStringVisitor)
    }

    pub fn is_null(&self) -> bool {
        self.version.is_empty()
    }

    pub(crate) fn from_legacy(s: &str) -> Result<Self, Error> {
        match json::legacy_payload(s) {
            Some(version) => Self::new(version),
            None => Ok(Self::default()),
        }
    }
}

fn parse_number(field: &str) -> Result<u64, Option<std::num::ParseIntError>> {
    // `u64::from_str` accepts a leading `+`
    if field.starts_with('+') {
        return Err(None);
    }
    field.parse().map_err(Some)
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

impl FromStr for VersionString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        VersionString::new(s)
    }
}

impl<'de> Deserialize<'de> for VersionString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(VersionStringVisitor)?
            .map_err(de::Error::custom)
    }
}

pub(crate) struct VersionStringVisitor;

impl<'de> Visitor<'de> for VersionStringVisitor {
    type Value = json::Decoded<VersionString>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a version string, null, or a VersionString object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        debug!("decoding null VersionString");
        Ok(Ok(VersionString::default()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        debug!(payload = v, "decoding VersionString from legacy string");
        Ok(VersionString::from_legacy(v))
    }

    // Each key is decoded on its own with the plain decoder for its value type, so
    // this never re-enters `VersionString::deserialize`.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        debug!("decoding VersionString from structured object");
        let mut decoded = VersionString::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "Version" => {
                    decoded.version = map.next_value::<Option<String>>()?.unwrap_or_default();
                }
                "Fields" => {
                    decoded.fields = map
                        .next_value::<Option<Vec<VersionField>>>()?
                        .unwrap_or_default();
                }
                "OrderedVersion" => {
                    decoded.ordered_version = map.next_value::<Option<bool>>()?.unwrap_or_default();
                }
                _ => {
                    map.next_value::<de::IgnoredAny>()?;
                    json::skip_map(&mut map)?;
                    return Ok(Err(Error::UnknownField {
                        target: TARGET,
                        field: key,
                    }));
                }
            }
        }

        Ok(Ok(decoded))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        json::skip_seq(&mut seq)?;
        Ok(Err(json::framing(TARGET, "'{'", "delimiter '['")))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'{'", format_args!("bool ({v})"))))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'{'", format_args!("number ({v})"))))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'{'", format_args!("number ({v})"))))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Err(json::framing(TARGET, "'{'", format_args!("number ({v})"))))
    }
}
