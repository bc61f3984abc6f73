use std::io::Cursor;
use std::sync::{Arc, Mutex};

use image::{ImageFormat, RgbImage};
use leptess::LepTess;
use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::{EvidexError, Result};

/// Text recognition over an RGB raster. Returns plain UTF-8 text without any
/// layout information.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &RgbImage) -> Result<String>;
}

enum OcrBackend {
    Local { tesseract: Arc<Mutex<LepTess>> },
    Unavailable { reason: String },
}

/// Tesseract-backed [`OcrEngine`].
///
/// Built once at startup. When Tesseract cannot be loaded the provider is
/// still constructed, but every call fails with
/// [`EvidexError::OcrUnavailable`].
pub struct OcrProvider {
    backend: OcrBackend,
}

fn create_tesseract(languages: &str) -> std::result::Result<LepTess, String> {
    LepTess::new(None, languages).map_err(|e| e.to_string())
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Self {
        let backend = match create_tesseract(&config.languages) {
            Ok(lt) => {
                info!(languages = %config.languages, "Tesseract OCR initialized");
                OcrBackend::Local {
                    tesseract: Arc::new(Mutex::new(lt)),
                }
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Self { backend }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }
}

impl OcrEngine for OcrProvider {
    fn recognize(&self, image: &RgbImage) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let mut png = Vec::new();
                image
                    .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
                    .map_err(|e| EvidexError::Ocr(format!("Failed to encode image: {e}")))?;

                let mut lt = tesseract
                    .lock()
                    .map_err(|_| EvidexError::Ocr("Tesseract handle poisoned".to_string()))?;
                lt.set_image_from_mem(&png)
                    .map_err(|e| EvidexError::Ocr(format!("Failed to set image: {e}")))?;
                lt.get_utf8_text()
                    .map_err(|e| EvidexError::Ocr(format!("Failed to extract text: {e}")))
            }
            OcrBackend::Unavailable { reason } => {
                Err(EvidexError::OcrUnavailable(reason.clone()))
            }
        }
    }
}

impl Clone for OcrProvider {
    fn clone(&self) -> Self {
        let backend = match &self.backend {
            OcrBackend::Local { tesseract } => OcrBackend::Local {
                tesseract: Arc::clone(tesseract),
            },
            OcrBackend::Unavailable { reason } => OcrBackend::Unavailable {
                reason: reason.clone(),
            },
        };
        Self { backend }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(languages: &str) -> OcrConfig {
        OcrConfig {
            languages: languages.to_string(),
            max_image_dimension: 4096,
        }
    }

    #[test]
    fn test_recognize_matches_availability() {
        let provider = OcrProvider::new(&make_config("eng"));
        let result = provider.recognize(&RgbImage::from_pixel(32, 32, image::Rgb([255, 255, 255])));

        if provider.is_available() {
            let text = result.unwrap();
            assert!(text.trim().is_empty(), "blank image produced {text:?}");
        } else {
            assert!(matches!(result, Err(EvidexError::OcrUnavailable(_))));
        }
    }

    #[test]
    fn test_unknown_language_is_unavailable() {
        let provider = OcrProvider::new(&make_config("no-such-language-pack"));
        assert!(!provider.is_available());
    }

    #[test]
    fn test_ocr_unavailable_returns_error() {
        let provider = OcrProvider {
            backend: OcrBackend::Unavailable {
                reason: "Test unavailable".to_string(),
            },
        };

        let result = provider.recognize(&RgbImage::new(10, 10));
        assert!(matches!(result, Err(EvidexError::OcrUnavailable(_))));
    }

    #[test]
    fn test_clone_keeps_availability() {
        let provider = OcrProvider::new(&make_config("eng"));
        let cloned = provider.clone();
        assert_eq!(provider.is_available(), cloned.is_available());
    }
}
