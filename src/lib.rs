//! Path-aware decoding of parsed JSON into strongly typed values.
//!
//! The input is an already parsed [`Value`](json::Value) tree. Numbers are
//! kept as their source lexeme and only checked against a Rust type when they
//! are decoded into it. Every error carries the path from the document root
//! to the offending value.
//!
//! ```rust
//! use codable_json::{Decodable, Error};
//!
//! #[derive(Decodable, Debug, PartialEq)]
//! #[codable(rename_all = "camelCase")]
//! struct Release {
//!     name: String,
//!     download_count: u8,
//!     tags: Option<Vec<String>>,
//! }
//!
//! let release: Release =
//!     codable_json::from_str(r#"{"name": "v1", "downloadCount": 12}"#).unwrap();
//! assert_eq!(release.download_count, 12);
//! assert_eq!(release.tags, None);
//!
//! let err = codable_json::from_str::<Release>(r#"{"name": "v1", "downloadCount": 312}"#)
//!     .unwrap_err();
//! assert!(matches!(err, Error::DataCorrupted(_)));
//! assert_eq!(err.to_string(), "Parsed JSON number <312> does not fit in u8. (at downloadCount)");
//! ```
#![allow(
    clippy::doc_markdown,
    clippy::enum_glob_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::redundant_else,
    clippy::single_match_else,
    clippy::too_many_lines
)]

#[doc(hidden)]
pub use codable_json_internal::*;

// Not public API.
#[doc(hidden)]
#[path = "export.rs"]
pub mod __private;

mod error;
mod options;
mod path;
#[cfg(feature = "serde_json")]
mod serde_json;

pub mod de;
pub mod json;

#[doc(inline)]
pub use crate::de::Decodable;
pub use crate::de::{Decoder, KeyedContainer, SingleValueContainer, UnkeyedContainer};
pub use crate::error::{Context, Error, Result};
pub use crate::options::{JsonDecoder, UserInfo, DEFAULT_MAX_DEPTH};
pub use crate::path::{CodingPath, PathSegment};

/// Decodes `T` from `value` with the default [`JsonDecoder`] configuration.
pub fn from_value<T: Decodable>(value: &json::Value) -> Result<T> {
    JsonDecoder::default().decode(value)
}

/// Parses `json` and decodes `T` from it with the default configuration.
#[cfg(feature = "serde_json")]
pub fn from_str<T: Decodable>(json: &str) -> Result<T> {
    JsonDecoder::default().decode_str(json)
}
