use crate::{Error, Result};
use encoding_rs::WINDOWS_1252;

/// UTF-16BE bytes with a leading byte order mark, the encoding PDF uses for
/// text strings outside of PDFDocEncoding.
pub fn encode_utf16_be(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&[0xFE, 0xFF]);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// Single byte WinAnsiEncoding (Windows-1252) bytes for `text`.
/// Fails if any character has no code in that encoding.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>> {
    let (bytes, _, had_unmappable) = WINDOWS_1252.encode(text);
    if had_unmappable {
        return Err(Error::CharacterEncoding);
    }
    Ok(bytes.into_owned())
}
