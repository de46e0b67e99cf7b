use codable_json::Decodable;

#[derive(Decodable)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

#[test]
fn unknown_fields_are_ignored() {
    let result = codable_json::from_str::<Point>(r#"{"x": 1, "y": 2, "z": 3}"#);
    assert!(result.is_ok());
}
