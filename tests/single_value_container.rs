use codable_json::json::{Number, Object, Value};
use codable_json::{Decodable, Decoder, Error, JsonDecoder, PathSegment, Result};

fn number(lexeme: &str) -> Value {
    Value::Number(Number::from_lexeme(lexeme))
}

#[test]
fn decode_nil_never_fails() {
    let config = JsonDecoder::new();
    for (value, is_null) in [
        (Value::Null, true),
        (Value::Bool(false), false),
        (number("0"), false),
        (Value::from(""), false),
        (Value::Array(vec![]), false),
        (Value::Object(Object::new()), false),
    ] {
        let container = config.decoder(&value).single_value_container();
        assert_eq!(container.decode_nil(), is_null);
    }
}

#[test]
fn primitives() {
    let config = JsonDecoder::new();

    let value = Value::Bool(true);
    assert!(config.decoder(&value).single_value_container().decode_bool().unwrap());

    let value = Value::from("borrowed");
    let container = config.decoder(&value).single_value_container();
    assert_eq!(container.decode_str().unwrap(), "borrowed");
    assert_eq!(container.decode::<String>().unwrap(), "borrowed");

    let value = number("-0.5e3");
    let container = config.decoder(&value).single_value_container();
    assert_eq!(container.decode_number().unwrap().as_str(), "-0.5e3");
    assert_eq!(container.decode::<f64>().unwrap(), -500.0);

    let value = Value::Null;
    let container = config.decoder(&value).single_value_container();
    container.decode::<()>().unwrap();
    assert_eq!(container.decode::<Option<bool>>().unwrap(), None);
}

#[test]
fn integers_are_parsed_exactly() {
    let cases = [
        ("1e2", "u32"),
        ("1.0", "i32"),
        ("-1", "u64"),
        ("9223372036854775808", "i64"),
        ("", "u8"),
        ("0x10", "u16"),
        ("-0.0", "u8"),
        ("-01", "u64"),
    ];
    for (lexeme, ty) in cases {
        let value = number(lexeme);
        let err = match ty {
            "u32" => codable_json::from_value::<u32>(&value).unwrap_err(),
            "i32" => codable_json::from_value::<i32>(&value).unwrap_err(),
            "u64" => codable_json::from_value::<u64>(&value).unwrap_err(),
            "i64" => codable_json::from_value::<i64>(&value).unwrap_err(),
            "u8" => codable_json::from_value::<u8>(&value).unwrap_err(),
            _ => codable_json::from_value::<u16>(&value).unwrap_err(),
        };
        assert!(matches!(err, Error::DataCorrupted(_)), "{}", lexeme);
        assert_eq!(
            err.debug_description(),
            format!("Parsed JSON number <{}> does not fit in {}.", lexeme, ty)
        );
        assert!(err.coding_path().is_empty());
    }
}

#[test]
fn negative_zero_fits_every_integer_type() {
    let value = number("-0");
    assert_eq!(codable_json::from_value::<u8>(&value).unwrap(), 0);
    assert_eq!(codable_json::from_value::<u16>(&value).unwrap(), 0);
    assert_eq!(codable_json::from_value::<u32>(&value).unwrap(), 0);
    assert_eq!(codable_json::from_value::<u64>(&value).unwrap(), 0);
    assert_eq!(codable_json::from_value::<u128>(&value).unwrap(), 0);
    assert_eq!(codable_json::from_value::<usize>(&value).unwrap(), 0);
    assert_eq!(codable_json::from_value::<i8>(&value).unwrap(), 0);
    assert_eq!(codable_json::from_value::<i64>(&value).unwrap(), 0);

    let parsed: Vec<u32> = codable_json::from_str("[-0, 0, 7]").unwrap();
    assert_eq!(parsed, [0, 0, 7]);
}

#[test]
fn integer_lexeme_decodes_as_float() {
    assert_eq!(codable_json::from_value::<f32>(&number("25")).unwrap(), 25.0);
    assert_eq!(codable_json::from_value::<f64>(&number("-7")).unwrap(), -7.0);
}

#[test]
fn floats_reject_non_finite_spellings() {
    for lexeme in ["inf", "-infinity", "NaN"] {
        let err = codable_json::from_value::<f64>(&number(lexeme)).unwrap_err();
        assert!(matches!(err, Error::DataCorrupted(_)), "{}", lexeme);
    }
}

#[test]
fn string_mismatch_reports_the_rust_type() {
    let err = codable_json::from_value::<String>(&Value::Bool(true)).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "String",
            ..
        }
    ));
    assert_eq!(
        err.debug_description(),
        "Expected to decode String but found bool instead."
    );
}

/// Decodes itself through the single value container of whatever it is
/// given, so it must see the same path as its parent.
#[derive(Debug, PartialEq)]
struct Celsius(f64);

impl Decodable for Celsius {
    fn decode(decoder: &Decoder) -> Result<Self> {
        let container = decoder.single_value_container();
        let degrees: f64 = container.decode()?;
        if degrees < -273.15 {
            return Err(container.data_corrupted("below absolute zero"));
        }
        Ok(Celsius(degrees))
    }
}

#[test]
fn composite_decode_keeps_path() {
    let temperatures: Vec<Celsius> = codable_json::from_str("[21.5, 0]").unwrap();
    assert_eq!(temperatures, [Celsius(21.5), Celsius(0.0)]);

    let err = codable_json::from_str::<Vec<Celsius>>("[21.5, -300]").unwrap_err();
    assert!(matches!(err, Error::DataCorrupted(_)));
    assert_eq!(err.coding_path(), [PathSegment::Index(1)]);
    assert_eq!(err.debug_description(), "below absolute zero");

    let err = codable_json::from_str::<Celsius>(r#""warm""#).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: "f64", .. }));
    assert!(err.coding_path().is_empty());
}
