use tracing::{debug, warn};

use crate::error::{EvidexError, Result};
use crate::models::Page;

/// A whole-document PDF text engine.
///
/// Implementations return one string per physical page, in page order. An
/// empty string is a valid page; an `Err` means the engine could not read the
/// document at all.
pub trait PdfEngine: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// Layout-aware extraction through `pdf-extract`.
pub struct PdfExtractEngine;

impl PdfEngine for PdfExtractEngine {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        // pdf-extract panics on some malformed streams instead of returning an error
        std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|_| EvidexError::Pdf("pdf-extract panicked while parsing".to_string()))?
            .map_err(|e| EvidexError::Pdf(format!("pdf-extract failed: {e}")))
    }
}

/// Content-stream text through `lopdf`.
pub struct LopdfEngine;

impl PdfEngine for LopdfEngine {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| EvidexError::Pdf(format!("lopdf failed to load document: {e}")))?;

        if doc.is_encrypted() {
            return Err(EvidexError::Pdf("document is encrypted".to_string()));
        }

        let pages = doc
            .get_pages()
            .into_keys()
            .map(|page_num| match doc.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    debug!(page_num, error = %e, "lopdf could not read page text");
                    String::new()
                }
            })
            .collect();

        Ok(pages)
    }
}

/// Per-page PDF extraction over an ordered list of engines.
///
/// The first engine that reads the whole document wins. Pages without text
/// (scans, blank pages) come back as empty pages and never cause the next
/// engine to be tried.
pub struct PdfExtractor {
    engines: Vec<Box<dyn PdfEngine>>,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::with_engines(vec![Box::new(PdfExtractEngine), Box::new(LopdfEngine)])
    }

    pub fn with_engines(engines: Vec<Box<dyn PdfEngine>>) -> Self {
        Self { engines }
    }

    pub fn extract(&self, bytes: &[u8]) -> Result<Vec<Page>> {
        let mut last_error = None;

        for engine in &self.engines {
            match engine.extract_pages(bytes) {
                Ok(texts) => {
                    let pages = Self::number_pages(texts);
                    let empty_pages = pages.iter().filter(|p| p.text.is_empty()).count();
                    debug!(
                        engine = engine.name(),
                        pages = pages.len(),
                        empty_pages,
                        "PDF text extracted"
                    );
                    return Ok(pages);
                }
                Err(e) => {
                    warn!(engine = engine.name(), error = %e, "PDF engine failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) => EvidexError::Pdf(format!("all PDF engines failed, last error: {e}")),
            None => EvidexError::Pdf("no PDF engines configured".to_string()),
        })
    }

    fn number_pages(texts: Vec<String>) -> Vec<Page> {
        texts
            .into_iter()
            .zip(1..)
            .map(|(text, page_num)| Page::new(page_num, text.trim()))
            .collect()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
