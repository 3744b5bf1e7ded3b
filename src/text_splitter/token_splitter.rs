use async_trait::async_trait;
use text_splitter::ChunkConfig;

use super::{SplitterOptions, TextSplitter, TextSplitterError, TiktokenSizer};

/// Splits text by token budget rather than character count.
///
/// Useful when chunk sizes must respect a model's context window. Sizing is
/// done with tiktoken; the actual splitting is delegated to the `text-splitter`
/// crate.
pub struct TokenTextSplitter {
    options: SplitterOptions,
}

impl Default for TokenTextSplitter {
    fn default() -> Self {
        Self::new(SplitterOptions::default())
    }
}

impl TokenTextSplitter {
    pub fn new(options: SplitterOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl TextSplitter for TokenTextSplitter {
    async fn split_text(&self, text: &str) -> Result<Vec<String>, TextSplitterError> {
        let config: ChunkConfig<TiktokenSizer> = (&self.options).try_into()?;
        let splitter = text_splitter::TextSplitter::new(config);
        Ok(splitter.chunks(text).map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_token_splitter_splits_long_text() {
        let options = SplitterOptions::new().with_chunk_size(10);
        let splitter = TokenTextSplitter::new(options);
        let text = "The index builder splits documents into chunks, embeds each \
                    chunk, and stores the pairs in a vector store for retrieval.";
        let chunks = splitter.split_text(text).await.unwrap();
        assert!(chunks.len() > 1);
    }

    #[tokio::test]
    async fn test_token_splitter_unknown_encoding() {
        let options = SplitterOptions::new().with_encoding_name("no_such_encoding");
        let splitter = TokenTextSplitter::new(options);
        assert!(matches!(
            splitter.split_text("abc").await,
            Err(TextSplitterError::TokenizerNotFound)
        ));
    }
}
