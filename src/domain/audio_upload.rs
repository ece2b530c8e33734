use std::path::Path;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// Container format of an uploaded audio file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,
    Mp4,
    Webm,
    Unknown,
}

impl AudioFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "wav" | "wave" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "mp4" | "m4a" | "aac" => Some(Self::Mp4),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/vnd.wave" => Some(Self::Wav),
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/flac" | "audio/x-flac" => Some(Self::Flac),
            "audio/ogg" | "audio/opus" => Some(Self::Ogg),
            "audio/mp4" | "audio/m4a" | "audio/x-m4a" | "audio/aac" => Some(Self::Mp4),
            "audio/webm" | "video/webm" => Some(Self::Webm),
            _ => None,
        }
    }

    /// Extension wins over the declared content type; browsers often send
    /// `application/octet-stream` for recorded blobs.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Self {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .or_else(|| content_type.and_then(Self::from_mime))
            .unwrap_or(Self::Unknown)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
            Self::Mp4 => "m4a",
            Self::Webm => "webm",
            Self::Unknown => "bin",
        }
    }

    pub fn is_wav(&self) -> bool {
        matches!(self, Self::Wav)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub id: UploadId,
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl AudioUpload {
    pub fn new(filename: String, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            id: UploadId::new(),
            filename,
            content_type,
            data,
        }
    }

    pub fn format(&self) -> AudioFormat {
        AudioFormat::detect(&self.filename, self.content_type.as_deref())
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
