use codable_json::{Decodable, Decoder, Result};

pub struct Rgb(u8, u8, u8);

impl Decodable for Rgb {
    fn decode(decoder: &Decoder) -> Result<Self> {
        let (r, g, b) = decoder.decode()?;
        Ok(Rgb(r, g, b))
    }
}

fn main() {
    let Rgb(r, g, b) = codable_json::from_str("[255, 128, 0]").unwrap();
    assert_eq!((r, g, b), (255, 128, 0));
}
