//! Decoding of user-supplied CSV bytes.

use std::borrow::Cow;

use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode an import file to text.
///
/// A leading BOM is dropped. Valid UTF-8 is borrowed as is. Bytes that are
/// mostly invalid UTF-8 are read as Windows-1251, the encoding spreadsheet
/// tools use for Cyrillic CSV exports. A UTF-8 file with a few stray bytes
/// keeps its UTF-8 text and only the stray bytes become U+FFFD.
pub fn decode_csv_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    if looks_like_windows_1251(bytes) {
        debug!("input is not UTF-8, decoding as windows-1251");
        let (decoded, _, _) = encoding_rs::WINDOWS_1251.decode(bytes);
        decoded
    } else {
        debug!("input has invalid UTF-8 sequences, replacing them");
        let (decoded, _) = encoding_rs::UTF_8.decode_without_bom_handling(bytes);
        decoded
    }
}

/// True when invalid sequences outnumber well-formed multi-byte characters.
///
/// Cyrillic in Windows-1251 is almost never valid UTF-8, while a UTF-8 file
/// damaged by an editor still has far more good characters than bad bytes.
fn looks_like_windows_1251(bytes: &[u8]) -> bool {
    let mut multibyte = 0usize;
    let mut invalid = 0usize;
    for chunk in bytes.utf8_chunks() {
        multibyte += chunk.valid().chars().filter(|c| !c.is_ascii()).count();
        if !chunk.invalid().is_empty() {
            invalid += 1;
        }
    }
    invalid > multibyte
}
