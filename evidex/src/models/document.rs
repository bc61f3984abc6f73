/// An uploaded document as handed to the pipeline.
///
/// The pipeline borrows the bytes for the duration of one call and keeps
/// nothing afterwards. `filename` only shows up in logs.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub bytes: &'a [u8],
    pub filename: &'a str,
    pub mime_type: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(bytes: &'a [u8], filename: &'a str, mime_type: &'a str) -> Self {
        Self {
            bytes,
            filename,
            mime_type,
        }
    }
}
