//! Numeric version strings with a JSON form that stays readable by old producers.
//!
//! A [`VersionString`] is written as a structured object but can be read back from
//! either that object or a bare string like `"1.2.3.4"`. [`VersionStrings`] does the
//! same for `;`-separated lists, reading either an array or `"1.2;3.4"`.

mod error;
mod field;
mod json;
pub mod settings;
mod version;
mod versions;

pub use error::Error;
pub use field::VersionField;
pub use version::VersionString;
pub use versions::VersionStrings;
