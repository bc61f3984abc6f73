use crate::models::Page;

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Decode as UTF-8, falling back to Latin-1. Never fails.
    pub fn extract(bytes: &[u8]) -> Vec<Page> {
        let text = Self::decode(bytes);
        let text = text.trim();

        if text.is_empty() {
            return Vec::new();
        }

        vec![Page::new(1, text)]
    }

    fn decode(bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            // Every byte is a Latin-1 code point of the same value.
            Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }
}
