use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::LazyLock;

static DATA_URL_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^data:[^;,]*(?:;[^;,]*)*;base64,").expect("valid data URL pattern")
});

/// Decode a base64 body field given either as a data URL or as bare base64.
///
/// Whitespace is ignored, so line-wrapped payloads decode as well.
pub fn decode_base64_payload(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let trimmed = payload.trim();

    let encoded = DATA_URL_PATTERN
        .find(trimmed)
        .map(|prefix| &trimmed[prefix.end()..])
        .unwrap_or(trimmed);

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact)
}
