use crate::domain::model::TextEncoding;

/// UTF-8 first, Latin-1 when the bytes are not valid UTF-8. Never fails.
pub fn decode_text(bytes: Vec<u8>) -> (String, TextEncoding) {
    match String::from_utf8(bytes) {
        Ok(text) => (text, TextEncoding::Utf8),
        Err(e) => (decode_latin1(e.as_bytes()), TextEncoding::Latin1),
    }
}

/// Every byte maps to the code point with the same value (U+0000..=U+00FF).
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
