use std::num::ParseIntError;

/// Errors produced while parsing or decoding version strings.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error("empty version string specified")]
    EmptyVersion,

    #[error("failed to convert field #{index} ({field}) to a number in version {version:?}")]
    MalformedVersion {
        index: usize,
        field: String,
        version: String,
        /// `None` when the field was rejected before integer parsing, e.g. a sign prefix.
        #[source]
        source: Option<ParseIntError>,
    },

    #[error("empty or malformed version string part[{index}] {part:?} in {list:?}")]
    MalformedVersionList {
        index: usize,
        part: String,
        list: String,
        #[source]
        source: Box<Error>,
    },

    #[error("bad JSON token {found} for {target}, expected {expected}")]
    JsonFraming {
        target: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("unknown field name {field:?} for {target} type")]
    UnknownField { target: &'static str, field: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
