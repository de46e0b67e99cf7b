use codable_json::Decodable;

#[derive(Decodable)]
#[codable(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub payload_body: T,
    pub trace: Option<Vec<String>>,
}

#[derive(Decodable)]
pub enum Level {
    Debug,
    Info,
}

fn main() {
    let envelope: Envelope<Level> =
        codable_json::from_str(r#"{"payloadBody": "Info"}"#).unwrap();
    assert!(matches!(envelope.payload_body, Level::Info));
    assert!(envelope.trace.is_none());
}
