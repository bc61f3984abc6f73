use serde::{Deserialize, Serialize};

/// One unit of extracted text. Numbered from 1 within a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page_num: u32,
    pub text: String,
}

impl Page {
    pub fn new(page_num: u32, text: impl Into<String>) -> Self {
        Self {
            page_num,
            text: text.into(),
        }
    }

    /// Length of the page text in characters, the unit chunk offsets use.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A bounded slice of a page.
///
/// `start_char..end_char` is the character range of the window the chunk was
/// cut from. `text` is that window trimmed, so the range can be wider than
/// the text it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub page_num: u32,
    pub chunk_index: u32,
    pub text: String,
    pub start_char: usize,
    pub end_char: usize,
}
