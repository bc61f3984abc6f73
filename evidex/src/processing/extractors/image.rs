use crate::config::OcrConfig;
use crate::error::Result;
use crate::models::Page;
use crate::ocr::{normalize_image, OcrEngine};

pub struct ImageExtractor;

impl ImageExtractor {
    /// Extract text from an image using OCR
    ///
    /// # Arguments
    /// * `bytes` - Raw image bytes (PNG, JPEG, etc.)
    /// * `ocr` - OCR capability the normalized RGB raster is handed to
    /// * `config` - OCR configuration for preprocessing
    ///
    /// # Returns
    /// A single page with the recognized text, or no pages if OCR found nothing
    pub fn extract(bytes: &[u8], ocr: &dyn OcrEngine, config: &OcrConfig) -> Result<Vec<Page>> {
        let rgb = normalize_image(bytes, config)?;
        let text = ocr.recognize(&rgb)?;
        let text = text.trim();

        if text.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![Page::new(1, text)])
    }
}
