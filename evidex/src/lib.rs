//! Text extraction and chunking for uploaded evidence documents.
//!
//! Raw bytes plus a declared MIME type go in; ordered, offset-addressable
//! chunks come out. PDF, DOCX, plain text and raster images (through OCR) are
//! supported. See [`processing::ProcessingPipeline`] for the entry point.

pub mod config;
pub mod error;
pub mod models;
pub mod ocr;
pub mod processing;
