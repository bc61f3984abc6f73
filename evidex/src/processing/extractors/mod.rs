pub mod docx;
pub mod image;
pub mod pdf;
pub mod text;

pub use self::docx::DocxExtractor;
pub use self::image::ImageExtractor;
pub use self::pdf::{LopdfEngine, PdfEngine, PdfExtractEngine, PdfExtractor};
pub use self::text::PlainTextExtractor;
