use core::str::FromStr;

use crate::de::{Decodable, Decoder};
use crate::error::{Error, Result};
use crate::json::{Number, Value};
use crate::path::CodingPath;

/// Decodes exactly one value, without descending into it.
#[derive(Debug)]
pub struct SingleValueContainer<'a> {
    decoder: Decoder<'a>,
}

impl<'a> SingleValueContainer<'a> {
    pub(crate) fn new(decoder: Decoder<'a>) -> Self {
        SingleValueContainer { decoder }
    }

    pub fn coding_path(&self) -> &CodingPath {
        self.decoder.coding_path()
    }

    /// Whether the value is null. Never fails.
    pub fn decode_nil(&self) -> bool {
        self.decoder.value().is_null()
    }

    pub fn decode_bool(&self) -> Result<bool> {
        match self.decoder.value() {
            Value::Bool(b) => Ok(*b),
            other => Err(self.type_mismatch("bool", other)),
        }
    }

    /// Borrows the string out of the document.
    pub fn decode_str(&self) -> Result<&'a str> {
        match self.decoder.value() {
            Value::String(s) => Ok(s),
            other => Err(self.type_mismatch("String", other)),
        }
    }

    pub fn decode_string(&self) -> Result<String> {
        self.decode_str().map(str::to_owned)
    }

    /// The raw number, for types that want to interpret the lexeme
    /// themselves.
    pub fn decode_number(&self) -> Result<&'a Number> {
        match self.decoder.value() {
            Value::Number(n) => Ok(n),
            other => Err(self.type_mismatch("number", other)),
        }
    }

    /// Exact parse of the lexeme as an integer of type `T`, named `ty` in
    /// errors. Fractions, exponents and out of range values are rejected,
    /// never rounded or truncated.
    pub(crate) fn decode_integer<T: FromStr>(&self, ty: &'static str) -> Result<T> {
        let number = self.number_for(ty)?;
        without_negative_zero_sign(number.as_str())
            .parse()
            .map_err(|_| Error::number_does_not_fit(number.as_str(), ty, self.coding_path()))
    }

    /// Parses the lexeme as the nearest representable float. Excess
    /// precision is rounded away; magnitudes beyond the finite range fail.
    pub(crate) fn decode_float<T>(&self, ty: &'static str, is_finite: fn(T) -> bool) -> Result<T>
    where
        T: FromStr + Copy,
    {
        let number = self.number_for(ty)?;
        match number.as_str().parse() {
            Ok(float) if is_finite(float) => Ok(float),
            _ => Err(Error::number_does_not_fit(
                number.as_str(),
                ty,
                self.coding_path(),
            )),
        }
    }

    /// Hands the same value and path to `T`'s own decode logic.
    pub fn decode<T: Decodable>(&self) -> Result<T> {
        T::decode(&self.decoder)
    }

    pub fn data_corrupted(&self, msg: impl Into<String>) -> Error {
        self.decoder.data_corrupted(msg)
    }

    fn number_for(&self, ty: &'static str) -> Result<&'a Number> {
        match self.decoder.value() {
            Value::Number(n) => Ok(n),
            other => Err(self.type_mismatch(ty, other)),
        }
    }

    fn type_mismatch(&self, expected: &'static str, found: &Value) -> Error {
        Error::type_mismatch(expected, found.kind(), self.coding_path())
    }
}

/// `-0` is zero, which unsigned `FromStr` would reject for its sign.
fn without_negative_zero_sign(lexeme: &str) -> &str {
    match lexeme.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b == b'0') => digits,
        _ => lexeme,
    }
}
