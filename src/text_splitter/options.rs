use text_splitter::{ChunkConfig, ChunkSizer};
use tiktoken_rs::{get_bpe_from_model, get_bpe_from_tokenizer, tokenizer::Tokenizer, CoreBPE};

use super::TextSplitterError;

/// Options for token-budget splitting.
///
/// A non-empty `encoding_name` selects the tiktoken encoding directly;
/// otherwise the encoding is inferred from `model_name`.
#[derive(Debug, Clone)]
pub struct SplitterOptions {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub model_name: String,
    pub encoding_name: String,
    pub trim_chunks: bool,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitterOptions {
    pub fn new() -> Self {
        SplitterOptions {
            chunk_size: 512,
            chunk_overlap: 0,
            model_name: String::from("gpt-3.5-turbo"),
            encoding_name: String::from("cl100k_base"),
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

    pub fn with_model_name<S: Into<String>>(mut self, model_name: S) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_encoding_name<S: Into<String>>(mut self, encoding_name: S) -> Self {
        self.encoding_name = encoding_name.into();
        self
    }

    pub fn with_trim_chunks(mut self, trim_chunks: bool) -> Self {
        self.trim_chunks = trim_chunks;
        self
    }
}

/// Measures chunk sizes in tiktoken tokens.
pub(crate) struct TiktokenSizer(CoreBPE);

impl TiktokenSizer {
    fn for_options(options: &SplitterOptions) -> Result<Self, TextSplitterError> {
        if options.encoding_name.is_empty() {
            let bpe = get_bpe_from_model(&options.model_name)
                .map_err(|_| TextSplitterError::InvalidModel)?;
            return Ok(TiktokenSizer(bpe));
        }

        let tokenizer = match options.encoding_name.to_lowercase().as_str() {
            "cl100k_base" => Tokenizer::Cl100kBase,
            "p50k_base" => Tokenizer::P50kBase,
            "p50k_edit" => Tokenizer::P50kEdit,
            "r50k_base" => Tokenizer::R50kBase,
            "gpt2" => Tokenizer::Gpt2,
            _ => return Err(TextSplitterError::TokenizerNotFound),
        };
        let bpe =
            get_bpe_from_tokenizer(tokenizer).map_err(|_| TextSplitterError::InvalidTokenizer)?;
        Ok(TiktokenSizer(bpe))
    }
}

impl ChunkSizer for TiktokenSizer {
    fn size(&self, chunk: &str) -> usize {
        self.0.encode_ordinary(chunk).len()
    }
}

impl TryFrom<&SplitterOptions> for ChunkConfig<TiktokenSizer> {
    type Error = TextSplitterError;

    fn try_from(options: &SplitterOptions) -> Result<Self, Self::Error> {
        let sizer = TiktokenSizer::for_options(options)?;
        Ok(ChunkConfig::new(options.chunk_size)
            .with_sizer(sizer)
            .with_trim(options.trim_chunks)
            .with_overlap(options.chunk_overlap)?)
    }
}
