use core::any;

use crate::de::{Decodable, Decoder, KeyedContainer};
use crate::error::{Error, Result};
use crate::json::Value;
use crate::path::{CodingPath, PathSegment};

/// Sequential access to the elements of an array.
///
/// The cursor starts at 0 and moves forward by one after every successful
/// decode. A failed decode leaves it where it was, and so does
/// [`decode_nil`](UnkeyedContainer::decode_nil) when the element is not null.
/// The container is deliberately not `Clone`.
#[derive(Debug)]
pub struct UnkeyedContainer<'a> {
    decoder: Decoder<'a>,
    elements: &'a [Value],
    current_index: usize,
}

impl<'a> UnkeyedContainer<'a> {
    pub(crate) fn new(decoder: Decoder<'a>) -> Result<Self> {
        match decoder.value() {
            Value::Array(elements) => {
                tracing::trace!(
                    path = %decoder.coding_path(),
                    count = elements.len(),
                    "unkeyed container"
                );
                Ok(UnkeyedContainer {
                    decoder,
                    elements,
                    current_index: 0,
                })
            }
            other => Err(Error::type_mismatch(
                "array",
                other.kind(),
                decoder.coding_path(),
            )),
        }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.decoder.coding_path()
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_at_end(&self) -> bool {
        self.current_index >= self.elements.len()
    }

    /// Consumes the current element if it is null. Any other element is left
    /// in place for a following typed decode.
    pub fn decode_nil(&mut self) -> Result<bool> {
        match self.elements.get(self.current_index) {
            Some(Value::Null) => {
                self.current_index += 1;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(self.at_end("null")),
        }
    }

    pub fn decode<T: Decodable>(&mut self) -> Result<T> {
        let element = self.element(any::type_name::<T>())?;
        let value = T::decode(&element)?;
        self.current_index += 1;
        Ok(value)
    }

    /// `None` when the container is exhausted or the current element is
    /// null (which is then consumed).
    pub fn decode_if_present<T: Decodable>(&mut self) -> Result<Option<T>> {
        if self.is_at_end() || self.decode_nil()? {
            return Ok(None);
        }
        self.decode().map(Some)
    }

    pub fn nested_unkeyed_container(&mut self) -> Result<UnkeyedContainer<'a>> {
        let container = self.element("array")?.unkeyed_container()?;
        self.current_index += 1;
        Ok(container)
    }

    pub fn nested_keyed_container(&mut self) -> Result<KeyedContainer<'a>> {
        let container = self.element("dictionary")?.keyed_container()?;
        self.current_index += 1;
        Ok(container)
    }

    /// An [`Error::DataCorrupted`] located at the current element.
    pub fn data_corrupted(&self, msg: impl Into<String>) -> Error {
        Error::data_corrupted(&self.current_path(), msg)
    }

    fn element(&self, expected: &'static str) -> Result<Decoder<'a>> {
        match self.elements.get(self.current_index) {
            Some(value) => self
                .decoder
                .descend(PathSegment::Index(self.current_index), value),
            None => Err(self.at_end(expected)),
        }
    }

    fn current_path(&self) -> CodingPath {
        self.coding_path().push(self.current_index)
    }

    fn at_end(&self, expected: &'static str) -> Error {
        Error::value_not_found(expected, &self.current_path(), "Unkeyed container is at end.")
    }
}
