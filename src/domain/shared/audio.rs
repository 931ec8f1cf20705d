use serde::{Deserialize, Serialize};

/// Audio container detected from magic bytes or a provider MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioEncoding {
    Wav,
    Mp3,
    Ogg,
    Unknown,
}

impl AudioEncoding {
    /// Detect the container from the first bytes of the payload
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WAVE" {
            AudioEncoding::Wav
        } else if bytes.starts_with(b"ID3")
            || (bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] & 0xE0 == 0xE0)
        {
            AudioEncoding::Mp3
        } else if bytes.starts_with(b"OggS") {
            AudioEncoding::Ogg
        } else {
            AudioEncoding::Unknown
        }
    }

    /// Map a provider MIME type (parameters ignored) to a container
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "audio/wav" | "audio/wave" | "audio/x-wav" => Some(AudioEncoding::Wav),
            "audio/mpeg" | "audio/mp3" => Some(AudioEncoding::Mp3),
            "audio/ogg" | "audio/opus" => Some(AudioEncoding::Ogg),
            _ => None,
        }
    }

    /// File extension handed to the encoder
    pub fn extension(&self) -> &'static str {
        match self {
            AudioEncoding::Wav => "wav",
            AudioEncoding::Mp3 => "mp3",
            AudioEncoding::Ogg => "ogg",
            AudioEncoding::Unknown => "bin",
        }
    }
}

impl std::fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AudioEncoding::Wav => "wav",
            AudioEncoding::Mp3 => "mp3",
            AudioEncoding::Ogg => "ogg",
            AudioEncoding::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// File extension for a still image, from its magic bytes
pub fn image_extension(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "jpg"
    } else if bytes.starts_with(b"GIF8") {
        "gif"
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "webp"
    } else {
        "img"
    }
}
