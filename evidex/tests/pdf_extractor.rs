mod common;

use common::build_pdf;
use evidex::error::EvidexError;
use evidex::processing::extractors::{LopdfEngine, PdfEngine, PdfExtractEngine, PdfExtractor};

#[test]
fn test_pages_are_numbered_in_order() {
    let bytes = build_pdf(&["Access control policy", "Incident response plan"]);

    let pages = PdfExtractor::new().extract(&bytes).unwrap();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].page_num, 1);
    assert_eq!(pages[1].page_num, 2);
    assert!(pages[0].text.contains("Access control policy"));
    assert!(pages[1].text.contains("Incident response plan"));
}

#[test]
fn test_blank_page_keeps_its_slot() {
    let bytes = build_pdf(&["Cover", "", "Appendix"]);

    let pages = PdfExtractor::new().extract(&bytes).unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[1].page_num, 2);
    assert_eq!(pages[1].text, "");
    assert!(pages[2].text.contains("Appendix"));
}

#[test]
fn test_page_text_is_trimmed() {
    let bytes = build_pdf(&["Retention schedule"]);

    let pages = PdfExtractor::new().extract(&bytes).unwrap();
    assert_eq!(pages[0].text, pages[0].text.trim());
}

#[test]
fn test_each_engine_reads_generated_document() {
    let bytes = build_pdf(&["Vendor risk review", "Second page"]);
    let engines: [&dyn PdfEngine; 2] = [&PdfExtractEngine, &LopdfEngine];

    for engine in engines {
        let pages = engine.extract_pages(&bytes).unwrap();
        assert_eq!(pages.len(), 2, "engine {}", engine.name());
        assert!(
            pages[0].contains("Vendor risk review"),
            "engine {} returned {:?}",
            engine.name(),
            pages[0]
        );
    }
}

#[test]
fn test_lopdf_alone_serves_as_fallback() {
    let bytes = build_pdf(&["Fallback text"]);
    let extractor = PdfExtractor::with_engines(vec![Box::new(LopdfEngine)]);

    let pages = extractor.extract(&bytes).unwrap();
    assert_eq!(pages.len(), 1);
    assert!(pages[0].text.contains("Fallback text"));
}

#[test]
fn test_unreadable_bytes_fail_after_all_engines() {
    let err = PdfExtractor::new()
        .extract(b"%PDF-1.7 this is not really a pdf")
        .unwrap_err();

    assert!(matches!(err, EvidexError::Pdf(_)));
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(PdfExtractor::new().extract(&[]).is_err());
}
