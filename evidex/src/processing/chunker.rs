use crate::config::ProcessingConfig;
use crate::models::{Chunk, Page};

/// Sentence endings a hard cut is pulled back to. All markers are two
/// characters wide and no two can start at the same position.
const SENTENCE_MARKERS: [[char; 2]; 4] = [['.', ' '], ['.', '\n'], ['?', ' '], ['!', ' ']];

/// Splits pages into sentence-aware chunks with character offsets.
///
/// Window starts advance by `chunk_size - chunk_overlap`, but never to a
/// position before the end of the previous window.
#[derive(Debug, Clone)]
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    pub fn new(config: &ProcessingConfig) -> Self {
        Self::with_params(config.chunk_size, config.chunk_overlap)
    }

    pub fn with_params(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Chunk every page in order. Empty pages contribute nothing.
    pub fn chunk(&self, pages: &[Page]) -> Vec<Chunk> {
        pages
            .iter()
            .flat_map(|page| self.chunk_page(page))
            .collect()
    }

    pub fn chunk_page(&self, page: &Page) -> Vec<Chunk> {
        let chars: Vec<char> = page.text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        if chars.len() <= self.chunk_size {
            return Self::make_chunk(page.page_num, 0, &chars, 0, chars.len())
                .into_iter()
                .collect();
        }

        self.chunk_windows(page.page_num, &chars)
    }

    fn chunk_windows(&self, page_num: u32, chars: &[char]) -> Vec<Chunk> {
        let len = chars.len();
        // A zero window would never move past `start`.
        let window = self.chunk_size.max(1);
        let stride = self.chunk_size.saturating_sub(self.chunk_overlap);

        let mut chunks = Vec::new();
        let mut start = 0;
        let mut chunk_index = 0;

        while start < len {
            let mut end = (start + window).min(len);

            if end < len {
                if let Some(boundary) = Self::last_sentence_end(chars, start, end) {
                    end = boundary;
                }
            }

            if let Some(chunk) = Self::make_chunk(page_num, chunk_index, chars, start, end) {
                chunks.push(chunk);
                chunk_index += 1;
            }

            // Never re-enter text a previous chunk already ended on.
            start = (start + stride).max(end);
        }

        chunks
    }

    /// Position just past the rightmost sentence marker lying entirely inside
    /// `start..end`.
    fn last_sentence_end(chars: &[char], start: usize, end: usize) -> Option<usize> {
        if end < start + 2 {
            return None;
        }

        (start..=end - 2)
            .rev()
            .find(|&pos| {
                SENTENCE_MARKERS
                    .iter()
                    .any(|marker| chars[pos] == marker[0] && chars[pos + 1] == marker[1])
            })
            .map(|pos| pos + 2)
    }

    fn make_chunk(
        page_num: u32,
        chunk_index: u32,
        chars: &[char],
        start: usize,
        end: usize,
    ) -> Option<Chunk> {
        let window: String = chars[start..end].iter().collect();
        let text = window.trim();
        if text.is_empty() {
            return None;
        }

        Some(Chunk {
            page_num,
            chunk_index,
            text: text.to_string(),
            start_char: start,
            end_char: end,
        })
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(&ProcessingConfig::default())
    }
}
