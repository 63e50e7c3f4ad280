//! Block content encoding
//!
//! Text content is stored line by line. Bytes content is base64 encoded and split into
//! payload lines prefixed by the comment style's data prefix (`#|` or `//|`).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::CommentStyle;

/// Length of the base64 payload carried by one data line
pub const DATA_LINE_LENGTH: usize = 120;

/// Split text into file lines, each terminated by a newline
pub fn encode_text(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.split_inclusive('\n').map(str::to_string).collect();
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') {
            last.push('\n');
        }
    }
    lines
}

/// Join text lines back into content
pub fn decode_text(lines: &[String]) -> String {
    lines.concat()
}

/// Encode bytes as prefixed base64 payload lines
pub fn encode_bytes(style: CommentStyle, content: &[u8]) -> Vec<String> {
    let data = STANDARD.encode(content);
    let prefix = style.data_prefix();
    // base64 output is ASCII, so byte chunks are valid UTF-8
    data.as_bytes()
        .chunks(DATA_LINE_LENGTH)
        .map(|chunk| format!("{}{}\n", prefix, String::from_utf8_lossy(chunk)))
        .collect()
}

/// Decode prefixed base64 payload lines, ignoring lines without the prefix
pub fn decode_bytes(
    style: CommentStyle,
    lines: &[String],
) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    let prefix = style.data_prefix();
    let data: String = lines
        .iter()
        .filter_map(|line| line.strip_prefix(prefix))
        .map(str::trim)
        .collect();
    STANDARD.decode(data)
}
