//! Fixture builders shared by the integration tests.
//!
//! Documents are generated in memory so the suite needs no binary fixtures
//! checked into the repository.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use evidex::config::OcrConfig;
use evidex::error::Result;
use evidex::ocr::OcrEngine;
use evidex::processing::{DocumentExtractor, ProcessingPipeline, TextChunker};
use image::RgbImage;

/// Builds a DOCX from `docx-rs` paragraphs and tables.
pub fn build_docx(docx: docx_rs::Docx) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .expect("Failed to pack DOCX");
    buffer.into_inner()
}

pub fn paragraph(text: &str) -> docx_rs::Paragraph {
    docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(text))
}

/// Builds a PDF with one page per entry. An empty entry produces a page with
/// an empty content stream.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("Failed to encode page content"),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to write PDF");
    bytes
}

pub fn build_png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::DynamicImage::new_rgb8(width, height)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// OCR engine that returns fixed text and records the image size it saw.
pub struct StubOcr {
    text: String,
    seen: std::sync::Mutex<Vec<(u32, u32)>>,
}

impl StubOcr {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn seen_dimensions(&self) -> Vec<(u32, u32)> {
        self.seen.lock().unwrap().clone()
    }
}

impl OcrEngine for StubOcr {
    fn recognize(&self, image: &RgbImage) -> Result<String> {
        self.seen.lock().unwrap().push(image.dimensions());
        Ok(self.text.clone())
    }
}

pub fn pipeline_with_ocr(
    ocr: Arc<dyn OcrEngine>,
    chunk_size: usize,
    chunk_overlap: usize,
) -> ProcessingPipeline {
    ProcessingPipeline::new(
        DocumentExtractor::new(ocr, OcrConfig::default()),
        TextChunker::with_params(chunk_size, chunk_overlap),
    )
}

pub fn pipeline(chunk_size: usize, chunk_overlap: usize) -> ProcessingPipeline {
    pipeline_with_ocr(Arc::new(StubOcr::new("")), chunk_size, chunk_overlap)
}
