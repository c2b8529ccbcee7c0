use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, Visitor},
};

/// One dot-separated component of a version.
///
/// Parsing only ever produces [`VersionField::Number`]. The ordered-string variant is
/// carried so that stored data using it survives a decode/encode cycle. Only the
/// payload selected by `IsStr` is kept; the other one is written back as its zero value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireField", into = "WireField")]
pub enum VersionField {
    Number(u64),
    Ordered(String),
}

impl VersionField {
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Ordered(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Ordered(_) => None,
        }
    }
}

impl std::fmt::Display for VersionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionField::Number(n) => write!(f, "{n}"),
            VersionField::Ordered(s) => write!(f, "{s}"),
        }
    }
}

// Stored form: `{"IsStr":false,"NumValue":1,"StrValue":""}`. Keys match without
// regard to ASCII case, missing keys and `null` values take their zero value, and
// unknown keys are ignored. A `null` entry is the zero field.
#[derive(Default, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireField {
    is_str: bool,
    num_value: u64,
    str_value: String,
}

impl<'de> Deserialize<'de> for WireField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WireFieldVisitor)
    }
}

struct WireFieldVisitor;

impl<'de> Visitor<'de> for WireFieldVisitor {
    type Value = WireField;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a VersionField object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(WireField::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        self.visit_unit()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut wire = WireField::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("IsStr") {
                if let Some(is_str) = map.next_value::<Option<bool>>()? {
                    wire.is_str = is_str;
                }
            } else if key.eq_ignore_ascii_case("NumValue") {
                if let Some(num_value) = map.next_value::<Option<u64>>()? {
                    wire.num_value = num_value;
                }
            } else if key.eq_ignore_ascii_case("StrValue") {
                if let Some(str_value) = map.next_value::<Option<String>>()? {
                    wire.str_value = str_value;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(wire)
    }
}

impl From<WireField> for VersionField {
    fn from(wire: WireField) -> Self {
        if wire.is_str {
            Self::Ordered(wire.str_value)
        } else {
            Self::Number(wire.num_value)
        }
    }
}

impl From<VersionField> for WireField {
    fn from(field: VersionField) -> Self {
        match field {
            VersionField::Number(num_value) => Self {
                num_value,
                ..Self::default()
            },
            VersionField::Ordered(str_value) => Self {
                is_str: true,
                str_value,
                ..Self::default()
            },
        }
    }
}
