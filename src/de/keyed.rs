use crate::de::{Decodable, Decoder, UnkeyedContainer};
use crate::error::{Error, Result};
use crate::json::{Object, Value};
use crate::path::{CodingPath, PathSegment};

/// Access to the members of an object by name.
///
/// Names are compared exactly; there is no case folding or normalization.
#[derive(Debug)]
pub struct KeyedContainer<'a> {
    decoder: Decoder<'a>,
    object: &'a Object,
}

impl<'a> KeyedContainer<'a> {
    pub(crate) fn new(decoder: Decoder<'a>) -> Result<Self> {
        match decoder.value() {
            Value::Object(object) => {
                tracing::trace!(
                    path = %decoder.coding_path(),
                    len = object.len(),
                    "keyed container"
                );
                Ok(KeyedContainer { decoder, object })
            }
            other => Err(Error::type_mismatch(
                "dictionary",
                other.kind(),
                decoder.coding_path(),
            )),
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.decoder.coding_path()
    }

    /// Member names in document order.
    pub fn all_keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        let object: &'a Object = self.object;
        object.keys()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    pub fn decode_nil(&self, key: &str) -> Result<bool> {
        self.member(key).map(Value::is_null)
    }

    pub fn decode<T: Decodable>(&self, key: &str) -> Result<T> {
        T::decode(&self.member_decoder(key)?)
    }

    /// `None` if `key` is missing or its value is null, for every `T`.
    /// Anything else is decoded exactly like [`decode`](Self::decode).
    pub fn decode_if_present<T: Decodable>(&self, key: &str) -> Result<Option<T>> {
        match self.object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.decode(key).map(Some),
        }
    }

    pub fn nested_keyed_container(&self, key: &str) -> Result<KeyedContainer<'a>> {
        self.member_decoder(key)?.keyed_container()
    }

    pub fn nested_unkeyed_container(&self, key: &str) -> Result<UnkeyedContainer<'a>> {
        self.member_decoder(key)?.unkeyed_container()
    }

    /// An [`Error::DataCorrupted`] located at `key`, whether or not the
    /// member exists.
    pub fn data_corrupted(&self, key: &str, msg: impl Into<String>) -> Error {
        Error::data_corrupted(&self.coding_path().push(key), msg)
    }

    fn member(&self, key: &str) -> Result<&'a Value> {
        let object: &'a Object = self.object;
        object
            .get(key)
            .ok_or_else(|| Error::key_not_found(key, self.coding_path()))
    }

    fn member_decoder(&self, key: &str) -> Result<Decoder<'a>> {
        let value = self.member(key)?;
        self.decoder.descend(PathSegment::from(key), value)
    }
}
