//! Decoding of [`Value`] trees into typed values.
//!
//! A type becomes decodable by implementing [`Decodable`], usually through
//! `#[derive(Decodable)]`. A hand-written implementation asks the
//! [`Decoder`] for the container shape it expects and pulls its fields out
//! of it:
//!
//! ```rust
//! use codable_json::de::{Decodable, Decoder};
//! use codable_json::Result;
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Decodable for Point {
//!     fn decode(decoder: &Decoder) -> Result<Self> {
//!         let mut container = decoder.unkeyed_container()?;
//!         Ok(Point {
//!             x: container.decode()?,
//!             y: container.decode()?,
//!         })
//!     }
//! }
//!
//! let point: Point = codable_json::from_str("[1, -2]").unwrap();
//! assert_eq!((point.x, point.y), (1, -2));
//! ```

mod impls;
mod keyed;
mod single;
mod unkeyed;

pub use self::keyed::KeyedContainer;
pub use self::single::SingleValueContainer;
pub use self::unkeyed::UnkeyedContainer;

use crate::error::{Error, Result};
use crate::json::Value;
use crate::options::{JsonDecoder, UserInfo};
use crate::path::{CodingPath, PathSegment};

/// Trait for types that can be decoded from a JSON [`Value`].
pub trait Decodable: Sized {
    /// Builds `Self` from the value the decoder points at. Implementations
    /// may call back into any container operation; errors returned by them
    /// should be propagated unchanged so they keep their path.
    fn decode(decoder: &Decoder) -> Result<Self>;

    // Not public API. Value used by derived impls when a field is absent.
    // Only `Option<T>` is expected to override it.
    #[doc(hidden)]
    #[inline]
    fn absent() -> Option<Self> {
        None
    }
}

/// Decoder state: the value being examined, where it sits in the document
/// and the caller's configuration.
///
/// A new decoder is created for every descent into a child value and
/// dropped once that child is decoded.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    value: &'a Value,
    path: CodingPath,
    config: &'a JsonDecoder,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(value: &'a Value, path: CodingPath, config: &'a JsonDecoder) -> Self {
        Decoder {
            value,
            path,
            config,
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Caller supplied context, forwarded untouched to every nested decode.
    pub fn user_info(&self) -> &'a UserInfo {
        self.config.user_info()
    }

    pub fn single_value_container(&self) -> SingleValueContainer<'a> {
        SingleValueContainer::new(self.clone())
    }

    /// Fails with [`Error::TypeMismatch`] unless the value is an array.
    pub fn unkeyed_container(&self) -> Result<UnkeyedContainer<'a>> {
        UnkeyedContainer::new(self.clone())
    }

    /// Fails with [`Error::TypeMismatch`] unless the value is an object.
    pub fn keyed_container(&self) -> Result<KeyedContainer<'a>> {
        KeyedContainer::new(self.clone())
    }

    /// Shorthand for `T::decode(self)`.
    pub fn decode<T: Decodable>(&self) -> Result<T> {
        T::decode(self)
    }

    /// An [`Error::DataCorrupted`] located at this decoder's path, for
    /// implementations that reject a value of the right shape.
    pub fn data_corrupted(&self, msg: impl Into<String>) -> Error {
        Error::data_corrupted(&self.path, msg)
    }

    /// Decoder for `value`, found at `segment` below the current value.
    pub(crate) fn descend(&self, segment: PathSegment, value: &'a Value) -> Result<Decoder<'a>> {
        let path = self.path.push(segment);
        if path.len() > self.config.max_depth() {
            tracing::debug!(
                path = %path,
                max_depth = self.config.max_depth(),
                "nesting depth limit reached"
            );
            return Err(Error::data_corrupted(
                &path,
                format!(
                    "Exceeded the maximum nesting depth of {}.",
                    self.config.max_depth()
                ),
            ));
        }
        tracing::trace!(path = %path, kind = %value.kind(), "descend");
        Ok(Decoder::new(value, path, self.config))
    }
}
