//! OCR (Optical Character Recognition) Module
//!
//! Image text extraction for the evidence pipeline. OCR itself is delegated to
//! Tesseract through `leptess`; this module only prepares the raster and
//! guards the engine handle.
//!
//! - `OcrEngine` trait is the capability boundary (RGB raster in, text out)
//! - `OcrProvider` implements it over a single shared Tesseract instance
//! - `normalize_image` decodes, downscales and converts input to RGB
//!
//! # Usage
//!
//! ```rust,ignore
//! let ocr = OcrProvider::new(&config.ocr);
//! let rgb = normalize_image(bytes, &config.ocr)?;
//! let text = ocr.recognize(&rgb)?;
//! ```

mod preprocessing;
mod provider;

pub use preprocessing::normalize_image;
pub use provider::{OcrEngine, OcrProvider};
