use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::models::{Chunk, Document};
use crate::ocr::OcrProvider;
use crate::processing::{DocumentExtractor, Extraction, TextChunker};

/// Extract-then-chunk service. Construct once and share behind an `Arc`.
pub struct ProcessingPipeline {
    extractor: DocumentExtractor,
    chunker: TextChunker,
}

impl ProcessingPipeline {
    pub fn new(extractor: DocumentExtractor, chunker: TextChunker) -> Self {
        Self { extractor, chunker }
    }

    /// Default extractor with Tesseract OCR and the configured chunker.
    pub fn from_config(config: &Config) -> Self {
        let ocr = OcrProvider::new(&config.ocr);
        if !ocr.is_available() {
            tracing::warn!("OCR unavailable - image documents will fail extraction");
        }

        let extractor = DocumentExtractor::new(Arc::new(ocr), config.ocr.clone());
        Self::new(extractor, TextChunker::new(&config.processing))
    }

    pub fn extractor(&self) -> &DocumentExtractor {
        &self.extractor
    }

    pub fn chunker(&self) -> &TextChunker {
        &self.chunker
    }

    /// Same pipeline with different chunking parameters.
    pub fn with_chunker(self, chunker: TextChunker) -> Self {
        Self { chunker, ..self }
    }

    pub fn process(&self, doc: &Document<'_>) -> Extraction<Vec<Chunk>> {
        let outcome = self
            .extractor
            .extract(doc)
            .map(|pages| self.chunker.chunk(&pages));

        if let Extraction::Extracted { content } = &outcome {
            info!(
                filename = %doc.filename,
                chunks = content.len(),
                chunk_size = self.chunker.chunk_size(),
                chunk_overlap = self.chunker.chunk_overlap(),
                "Document chunked"
            );
        }

        outcome
    }

    /// Flat form of [`process`](Self::process): any failure yields no chunks.
    pub fn extract_and_chunk(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Vec<Chunk> {
        self.process(&Document::new(bytes, filename, mime_type))
            .into_content()
    }
}
