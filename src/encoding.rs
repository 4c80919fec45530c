//! Charset detection and transcoding for byte input.
//!
//! Magazine page archives arrive as raw bytes of unknown charset. The
//! decoder honors a byte-order mark first, then a `charset=` declaration
//! in the document head, then falls back to UTF-8 with lossy replacement.

use encoding_rs::{Encoding, UTF_8};

/// Only the head of the document is sniffed for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Decode raw HTML bytes into a string.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        let (text, _, _) = encoding.decode(bytes);
        return text.into_owned();
    }
    let encoding = sniff_meta_charset(bytes).unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Look for `charset=<label>` in the first kilobyte.
fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let prefix = &bytes[..bytes.len().min(SNIFF_LIMIT)];
    let haystack = String::from_utf8_lossy(prefix).to_lowercase();
    let idx = haystack.find("charset=")?;
    let rest = &haystack[idx + "charset=".len()..];
    let label: String = rest
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    Encoding::for_label(label.as_bytes())
}
