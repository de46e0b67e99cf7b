use core::fmt;

use ::serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use ::serde_json::value::RawValue;
use ::serde_json::{Number as JNumber, Value as JValue};

use crate::error::{Error, Result};
use crate::json::{Number, Object, Value};
use crate::path::CodingPath;

impl From<JNumber> for Number {
    /// serde_json normalizes exponents while scanning (`1E5` becomes
    /// `1e+5`), so this lexeme is serde_json's spelling. Use
    /// [`from_str`](crate::from_str) to keep the source text.
    fn from(n: JNumber) -> Self {
        Number::from_lexeme(n.to_string())
    }
}

impl From<JValue> for Value {
    fn from(value: JValue) -> Self {
        match value {
            JValue::Null => Value::Null,
            JValue::Bool(b) => Value::Bool(b),
            JValue::Number(n) => Value::Number(n.into()),
            JValue::String(s) => Value::String(s),
            JValue::Array(array) => Value::Array(array.into_iter().map(Value::from).collect()),
            JValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Object>(),
            ),
        }
    }
}

impl From<&JValue> for Value {
    fn from(value: &JValue) -> Self {
        Value::from(value.clone())
    }
}

/// Members of an object in source order, values still unparsed.
struct Members<'a>(Vec<(String, &'a RawValue)>);

impl<'de> Deserialize<'de> for Members<'de> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = Members<'de>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> core::result::Result<Self::Value, A::Error> {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(member) = map.next_entry::<String, &'de RawValue>()? {
                    members.push(member);
                }
                Ok(Members(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

/// Converts one syntactically valid JSON text. Numbers keep the raw token
/// text as their lexeme.
fn convert(raw: &RawValue) -> ::serde_json::Result<Value> {
    let text = raw.get();
    let value = match text.as_bytes().first() {
        Some(b'n') => Value::Null,
        Some(b't' | b'f') => Value::Bool(::serde_json::from_str(text)?),
        Some(b'"') => Value::String(::serde_json::from_str(text)?),
        Some(b'[') => {
            let elements: Vec<&RawValue> = ::serde_json::from_str(text)?;
            Value::Array(elements.into_iter().map(convert).collect::<::serde_json::Result<_>>()?)
        }
        Some(b'{') => {
            let Members(members) = ::serde_json::from_str(text)?;
            let mut object = Object::with_capacity(members.len());
            for (key, member) in members {
                object.insert(key, convert(member)?);
            }
            Value::Object(object)
        }
        _ => Value::Number(Number::from_lexeme(text)),
    };
    Ok(value)
}

pub(crate) fn parse(json: &str) -> Result<Value> {
    ::serde_json::from_str::<&RawValue>(json)
        .and_then(convert)
        .map_err(|err| {
            tracing::debug!(error = %err, "invalid JSON text");
            Error::data_corrupted(
                &CodingPath::root(),
                format!("The given data was not valid JSON: {}", err),
            )
        })
}
