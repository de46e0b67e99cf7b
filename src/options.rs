use core::any::Any;
use core::fmt::{self, Debug};
use std::collections::HashMap;

use crate::de::{Decodable, Decoder};
use crate::error::Result;
use crate::json::Value;
use crate::path::CodingPath;

/// Default for [`JsonDecoder::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Opaque caller context made available to every [`Decodable`] impl through
/// [`Decoder::user_info`]. The decoder itself never looks inside.
#[derive(Default)]
pub struct UserInfo {
    entries: HashMap<&'static str, Box<dyn Any>>,
}

impl UserInfo {
    pub fn new() -> Self {
        UserInfo::default()
    }

    /// Returns the previous entry for `key`, whatever its type was.
    pub fn insert<T: Any>(&mut self, key: &'static str, value: T) -> Option<Box<dyn Any>> {
        self.entries.insert(key, Box::new(value))
    }

    /// `None` if `key` is missing or holds a value of another type.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|value| value.downcast_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for UserInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Entry point of a decode, holding its configuration.
///
/// ```rust
/// use codable_json::json::{Number, Value};
/// use codable_json::JsonDecoder;
///
/// let mut decoder = JsonDecoder::new().with_max_depth(8);
/// decoder.insert_user_info("unit", "cm");
///
/// let value = Value::Number(Number::from(42u8));
/// let n: u32 = decoder.decode(&value).unwrap();
/// assert_eq!(n, 42);
/// ```
#[derive(Debug)]
pub struct JsonDecoder {
    max_depth: usize,
    user_info: UserInfo,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        JsonDecoder {
            max_depth: DEFAULT_MAX_DEPTH,
            user_info: UserInfo::default(),
        }
    }
}

impl JsonDecoder {
    pub fn new() -> Self {
        JsonDecoder::default()
    }

    /// Deepest path a decode may descend to. The root has depth 0, its
    /// children depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = user_info;
        self
    }

    pub fn insert_user_info<T: Any>(&mut self, key: &'static str, value: T) -> &mut Self {
        self.user_info.insert(key, value);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    /// Decoder state for the root of `value`, with an empty path.
    pub fn decoder<'a>(&'a self, value: &'a Value) -> Decoder<'a> {
        Decoder::new(value, CodingPath::root(), self)
    }

    pub fn decode<T: Decodable>(&self, value: &Value) -> Result<T> {
        tracing::trace!(kind = %value.kind(), "decode");
        T::decode(&self.decoder(value))
    }

    /// Parses `json` with `serde_json` and decodes the result. A syntax
    /// error is reported as [`Error::DataCorrupted`](crate::Error) at the
    /// root.
    #[cfg(feature = "serde_json")]
    pub fn decode_str<T: Decodable>(&self, json: &str) -> Result<T> {
        let value = crate::serde_json::parse(json)?;
        self.decode(&value)
    }
}
