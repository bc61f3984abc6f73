use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config::OcrConfig;
use crate::error::{EvidexError, Result};
use crate::models::{normalize_mime, Document, DocumentFormat, Page};
use crate::ocr::OcrEngine;
use crate::processing::extractors::{DocxExtractor, ImageExtractor, PdfExtractor, PlainTextExtractor};

/// Outcome of running one document through the pipeline.
///
/// Keeps "nothing to extract" apart from "extraction broke" so callers can
/// alert or retry instead of silently indexing an empty document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Extraction<T> {
    Extracted { content: T },
    Unsupported { mime_type: String },
    Failed { reason: String },
}

impl<T> Extraction<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extraction<U> {
        match self {
            Self::Extracted { content } => Extraction::Extracted {
                content: f(content),
            },
            Self::Unsupported { mime_type } => Extraction::Unsupported { mime_type },
            Self::Failed { reason } => Extraction::Failed { reason },
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Extracted { .. } => "extracted",
            Self::Unsupported { .. } => "unsupported",
            Self::Failed { .. } => "failed",
        }
    }
}

impl<T: Default> Extraction<T> {
    /// The extracted content, or an empty value for unsupported and failed
    /// documents.
    pub fn into_content(self) -> T {
        match self {
            Self::Extracted { content } => content,
            Self::Unsupported { .. } | Self::Failed { .. } => T::default(),
        }
    }
}

impl Extraction<Vec<Page>> {
    pub fn into_pages(self) -> Vec<Page> {
        self.into_content()
    }
}

/// Selects an extractor from the declared MIME type and contains its failures.
///
/// Holds only immutable configuration and the shared OCR handle, so one value
/// serves every worker thread.
pub struct DocumentExtractor {
    pdf: PdfExtractor,
    ocr: Arc<dyn OcrEngine>,
    ocr_config: OcrConfig,
}

impl DocumentExtractor {
    pub fn new(ocr: Arc<dyn OcrEngine>, ocr_config: OcrConfig) -> Self {
        Self::with_pdf_extractor(PdfExtractor::new(), ocr, ocr_config)
    }

    pub fn with_pdf_extractor(
        pdf: PdfExtractor,
        ocr: Arc<dyn OcrEngine>,
        ocr_config: OcrConfig,
    ) -> Self {
        Self {
            pdf,
            ocr,
            ocr_config,
        }
    }

    /// Extract ordered pages from one document. Never returns an error; see
    /// [`Extraction`].
    pub fn extract(&self, doc: &Document<'_>) -> Extraction<Vec<Page>> {
        let Some(format) = DocumentFormat::from_mime(doc.mime_type) else {
            warn!(
                filename = %doc.filename,
                mime_type = %doc.mime_type,
                "Unsupported file type"
            );
            return Extraction::Unsupported {
                mime_type: normalize_mime(doc.mime_type),
            };
        };

        match self.extract_format(format, doc.bytes) {
            Ok(pages) => {
                debug!(
                    filename = %doc.filename,
                    format = %format,
                    pages = pages.len(),
                    "Extracted document text"
                );
                Extraction::Extracted { content: pages }
            }
            Err(e) => {
                error!(
                    filename = %doc.filename,
                    format = %format,
                    error = %e,
                    "Error extracting text"
                );
                Extraction::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn extract_format(&self, format: DocumentFormat, bytes: &[u8]) -> Result<Vec<Page>> {
        match format {
            DocumentFormat::Pdf => self.pdf.extract(bytes),
            DocumentFormat::Docx => DocxExtractor::extract(bytes),
            DocumentFormat::Text => Ok(PlainTextExtractor::extract(bytes)),
            DocumentFormat::Image => ImageExtractor::extract(bytes, &*self.ocr, &self.ocr_config),
        }
    }
}

/// OCR stand-in for deployments without Tesseract; every call fails.
pub struct NoOcr;

impl OcrEngine for NoOcr {
    fn recognize(&self, _image: &image::RgbImage) -> Result<String> {
        Err(EvidexError::OcrUnavailable(
            "no OCR engine configured".to_string(),
        ))
    }
}
