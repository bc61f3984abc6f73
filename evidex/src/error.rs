use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvidexError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("DOCX extraction error: {0}")]
    Docx(String),

    #[error("Image decode error: {0}")]
    Image(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),
}

pub type Result<T> = std::result::Result<T, EvidexError>;
