use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

/// Raster image subtypes handed to OCR.
pub const IMAGE_SUBTYPES: &[&str] = &["png", "jpeg", "jpg", "gif", "bmp", "tiff", "webp"];

/// Extraction strategy selected from a declared MIME type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
    Image,
}

impl DocumentFormat {
    /// Map a declared MIME type to a format.
    ///
    /// The value is trimmed and lowercased and any `;`-parameters are dropped,
    /// so `Text/Plain; charset=utf-8` selects [`DocumentFormat::Text`].
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let essence = normalize_mime(mime_type);

        match essence.as_str() {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            TEXT_MIME => Some(Self::Text),
            other => other
                .strip_prefix("image/")
                .filter(|subtype| IMAGE_SUBTYPES.contains(subtype))
                .map(|_| Self::Image),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
        }
    }
}

pub fn normalize_mime(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
