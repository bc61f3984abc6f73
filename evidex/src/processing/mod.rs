mod chunker;
mod extractor;
mod pipeline;

pub mod extractors;

pub use chunker::TextChunker;
pub use extractor::{DocumentExtractor, Extraction, NoOcr};
pub use pipeline::ProcessingPipeline;
