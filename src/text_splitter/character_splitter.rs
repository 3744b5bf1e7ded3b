use async_trait::async_trait;

use super::{TextSplitter, TextSplitterError};

/// Configuration for [`CharacterTextSplitter`].
#[derive(Debug, Clone)]
pub struct CharacterTextSplitterOptions {
    /// Maximum chunk size, in characters.
    pub chunk_size: usize,
    /// Overlap between consecutive chunks, in characters.
    pub chunk_overlap: usize,
    /// Separator to split on. Empty means split per character.
    pub separator: String,
    /// Whether to trim whitespace from chunks. Trimming makes chunk
    /// concatenation lossy, so it is off by default.
    pub trim_chunks: bool,
}

impl Default for CharacterTextSplitterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterTextSplitterOptions {
    pub fn new() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 0,
            separator: " ".to_string(),
            trim_chunks: false,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_trim_chunks(mut self, trim_chunks: bool) -> Self {
        self.trim_chunks = trim_chunks;
        self
    }
}

/// Separator-based splitter with a fixed maximum chunk size.
///
/// Parts are packed greedily up to `chunk_size` characters. A separator that
/// falls on a chunk boundary is carried at the head of the next chunk, so with
/// zero overlap and trimming disabled, concatenating the chunks reproduces the
/// input exactly. A single part longer than `chunk_size` cannot be split
/// further at a separator and falls back to fixed character windows.
pub struct CharacterTextSplitter {
    options: CharacterTextSplitterOptions,
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterTextSplitter {
    pub fn new() -> Self {
        Self::with_options(CharacterTextSplitterOptions::default())
    }

    pub fn with_options(options: CharacterTextSplitterOptions) -> Self {
        Self { options }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.options.chunk_size = chunk_size;
        self
    }

    pub fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.options.chunk_overlap = chunk_overlap;
        self
    }

    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.options.separator = separator.into();
        self
    }

    /// Character budget for packed content. Leaves room for the overlap
    /// prefix so finished chunks never exceed `chunk_size`.
    fn content_budget(&self) -> usize {
        self.options
            .chunk_size
            .saturating_sub(self.options.chunk_overlap)
            .max(1)
    }

    fn split_by_separator(&self, text: &str) -> Vec<String> {
        if self.options.separator.is_empty() {
            return self.apply_overlap(self.split_by_characters(text));
        }

        let budget = self.content_budget();
        let mut chunks = Vec::new();
        let mut current = String::new();

        for (i, part) in text.split(&self.options.separator).enumerate() {
            // The separator travels with the part that follows it, so chunk
            // boundaries never drop characters.
            let piece = if i > 0 {
                format!("{}{}", self.options.separator, part)
            } else {
                part.to_string()
            };

            let piece_len = piece.chars().count();
            let current_len = current.chars().count();

            if current_len + piece_len <= budget {
                current.push_str(&piece);
                continue;
            }

            if !current.is_empty() {
                self.push_chunk(&mut chunks, std::mem::take(&mut current));
            }

            if piece_len > budget {
                // Atomic unit larger than the budget: character windows.
                for window in self.split_by_characters(&piece) {
                    self.push_chunk(&mut chunks, window);
                }
            } else {
                current = piece;
            }
        }

        if !current.is_empty() {
            self.push_chunk(&mut chunks, current);
        }

        self.apply_overlap(chunks)
    }

    fn split_by_characters(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let size = self.content_budget();

        chars
            .chunks(size)
            .map(|window| window.iter().collect())
            .collect()
    }

    fn push_chunk(&self, chunks: &mut Vec<String>, chunk: String) {
        let chunk = if self.options.trim_chunks {
            chunk.trim().to_string()
        } else {
            chunk
        };
        if !chunk.is_empty() {
            chunks.push(chunk);
        }
    }

    fn apply_overlap(&self, chunks: Vec<String>) -> Vec<String> {
        if self.options.chunk_overlap == 0 || chunks.len() <= 1 {
            return chunks;
        }

        let mut overlapped = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                overlapped.push(chunk.clone());
                continue;
            }
            let prev: Vec<char> = chunks[i - 1].chars().collect();
            let tail_start = prev.len().saturating_sub(self.options.chunk_overlap);
            let mut with_overlap: String = prev[tail_start..].iter().collect();
            with_overlap.push_str(chunk);
            overlapped.push(with_overlap);
        }
        overlapped
    }
}

#[async_trait]
impl TextSplitter for CharacterTextSplitter {
    async fn split_text(&self, text: &str) -> Result<Vec<String>, TextSplitterError> {
        if text.is_empty() {
            return Ok(vec![]);
        }
        if self.options.chunk_size == 0 || self.options.chunk_overlap >= self.options.chunk_size {
            return Err(TextSplitterError::InvalidSplitterOptions);
        }
        Ok(self.split_by_separator(text))
    }
}
