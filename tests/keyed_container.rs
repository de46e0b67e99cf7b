use std::collections::{BTreeMap, HashMap};

use codable_json::json::{Number, Object, Value};
use codable_json::{Error, JsonDecoder, PathSegment};

fn person() -> Value {
    let mut object = Object::new();
    object.insert("name".to_owned(), Value::from("Ada"));
    object.insert("age".to_owned(), Value::Number(Number::from(36u8)));
    object.insert("nickname".to_owned(), Value::Null);
    object.insert("languages".to_owned(), Value::Array(vec![Value::from("en")]));
    Value::Object(object)
}

#[test]
fn contains_matches_names_exactly() {
    let config = JsonDecoder::new();
    let value = person();
    let container = config.decoder(&value).keyed_container().unwrap();

    assert!(container.contains("name"));
    assert!(container.contains("nickname"));
    assert!(!container.contains("Name"));
    assert!(!container.contains("email"));
    assert_eq!(
        container.all_keys().collect::<Vec<_>>(),
        ["name", "age", "nickname", "languages"]
    );
}

#[test]
fn decode_members() {
    let config = JsonDecoder::new();
    let value = person();
    let container = config.decoder(&value).keyed_container().unwrap();

    assert_eq!(container.decode::<String>("name").unwrap(), "Ada");
    assert_eq!(container.decode::<u32>("age").unwrap(), 36);
    assert_eq!(container.decode::<Vec<String>>("languages").unwrap(), ["en"]);
    assert_eq!(container.decode::<Option<String>>("nickname").unwrap(), None);
}

#[test]
fn missing_key() {
    let config = JsonDecoder::new();
    let value = person();
    let container = config.decoder(&value).keyed_container().unwrap();

    let err = container.decode::<String>("email").unwrap_err();
    match &err {
        Error::KeyNotFound { key, .. } => assert_eq!(key, "email"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.coding_path().is_empty());
    assert_eq!(err.debug_description(), "No value associated with key \"email\".");

    let err = container.decode_nil("email").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn decode_nil() {
    let config = JsonDecoder::new();
    let value = person();
    let container = config.decoder(&value).keyed_container().unwrap();

    assert!(container.decode_nil("nickname").unwrap());
    assert!(!container.decode_nil("name").unwrap());
}

#[test]
fn type_mismatch_carries_member_path() {
    let config = JsonDecoder::new();
    let value = person();
    let container = config.decoder(&value).keyed_container().unwrap();

    let err = container.decode::<u8>("name").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: "u8", .. }));
    assert_eq!(err.coding_path(), [PathSegment::Key("name".to_owned())]);
    assert_eq!(err.to_string(), "Expected to decode u8 but found a string instead. (at name)");

    let err = container.decode::<Vec<u8>>("languages").unwrap_err();
    assert_eq!(
        err.coding_path(),
        [PathSegment::Key("languages".to_owned()), PathSegment::Index(0)]
    );
}

#[test]
fn decode_if_present() {
    let config = JsonDecoder::new();
    let value = person();
    let container = config.decoder(&value).keyed_container().unwrap();

    assert_eq!(container.decode_if_present::<String>("email").unwrap(), None);
    // present but null counts as absent, whatever the requested type
    assert_eq!(container.decode_if_present::<String>("nickname").unwrap(), None);
    assert_eq!(container.decode_if_present::<u8>("nickname").unwrap(), None);
    assert_eq!(
        container.decode_if_present::<String>("name").unwrap(),
        Some("Ada".to_owned())
    );

    let err = container.decode_if_present::<bool>("age").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: "bool", .. }));
    assert_eq!(err.coding_path(), [PathSegment::Key("age".to_owned())]);
}

#[test]
fn container_requires_an_object() {
    let config = JsonDecoder::new();
    let value = Value::Array(vec![]);
    let err = config.decoder(&value).keyed_container().unwrap_err();

    assert!(matches!(err, Error::TypeMismatch { expected: "dictionary", .. }));
    assert_eq!(
        err.debug_description(),
        "Expected to decode dictionary but found an array instead."
    );
}

#[test]
fn nested_containers() {
    let config = JsonDecoder::new();
    let mut inner = Object::new();
    inner.insert("street".to_owned(), Value::Null);
    let mut outer = Object::new();
    outer.insert("address".to_owned(), Value::Object(inner));
    outer.insert("tags".to_owned(), Value::Array(vec![Value::Bool(true)]));
    let value = Value::Object(outer);
    let container = config.decoder(&value).keyed_container().unwrap();

    let address = container.nested_keyed_container("address").unwrap();
    assert_eq!(
        address.coding_path().to_vec(),
        [PathSegment::Key("address".to_owned())]
    );
    let err = address.decode::<String>("street").unwrap_err();
    assert_eq!(err.to_string(), "Expected to decode String but found null instead. (at address.street)");

    let mut tags = container.nested_unkeyed_container("tags").unwrap();
    assert!(tags.decode::<bool>().unwrap());

    let err = container.nested_unkeyed_container("address").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: "array", .. }));
    let err = container.nested_keyed_container("missing").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { .. }));
}

#[test]
fn duplicate_keys_resolve_to_last_occurrence() {
    // An object built from source text with a repeated key keeps only the
    // last value. Decoding has no way to see the earlier one.
    let object: Object = vec![
        ("id", Value::Number(Number::from(1u8))),
        ("id", Value::Number(Number::from(2u8))),
    ]
    .into_iter()
    .collect();
    let value = Value::Object(object);

    let config = JsonDecoder::new();
    let container = config.decoder(&value).keyed_container().unwrap();
    assert_eq!(container.all_keys().count(), 1);
    assert_eq!(container.decode::<u8>("id").unwrap(), 2);
}

#[test]
fn maps_parse_their_keys() {
    let map: BTreeMap<u32, bool> =
        codable_json::from_str(r#"{"2": true, "10": false}"#).unwrap();
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(2, true), (10, false)]);

    let map: HashMap<String, Option<u8>> =
        codable_json::from_str(r#"{"a": 1, "b": null}"#).unwrap();
    assert_eq!(map["a"], Some(1));
    assert_eq!(map["b"], None);

    let err = codable_json::from_str::<BTreeMap<u32, bool>>(r#"{"1": true, "x": false}"#)
        .unwrap_err();
    assert!(matches!(err, Error::DataCorrupted(_)));
    assert_eq!(err.coding_path(), [PathSegment::Key("x".to_owned())]);
}

#[test]
fn data_corrupted_points_at_key() {
    let config = JsonDecoder::new();
    let value = person();
    let container = config.decoder(&value).keyed_container().unwrap();

    let err = container.data_corrupted("age", "age must be at least 40");
    assert!(matches!(err, Error::DataCorrupted(_)));
    assert_eq!(err.coding_path(), [PathSegment::Key("age".to_owned())]);
    assert_eq!(err.to_string(), "age must be at least 40 (at age)");
}
