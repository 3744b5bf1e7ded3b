use std::collections::HashMap;
use std::path::Path;
use std::pin::Pin;

use async_stream::stream;
use async_trait::async_trait;
use futures::Stream;
use serde_json::Value;

use super::{process_doc_stream, Loader, LoaderError};
use crate::schemas::{Document, SOURCE_METADATA_KEY};
use crate::text_splitter::TextSplitter;

/// Loads a whole text as a single document.
#[derive(Debug, Clone)]
pub struct TextLoader {
    content: String,
    source: Option<String>,
}

impl TextLoader {
    pub fn from_string<S: Into<String>>(input: S) -> Self {
        Self {
            content: input.into(),
            source: None,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self {
            content,
            source: Some(path.as_ref().display().to_string()),
        })
    }

    /// Override the `source` metadata recorded on the produced document.
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[async_trait]
impl Loader for TextLoader {
    async fn load(
        mut self,
    ) -> Result<
        Pin<Box<dyn Stream<Item = Result<Document, LoaderError>> + Send + 'static>>,
        LoaderError,
    > {
        let stream = stream! {
            let mut document = Document::new(self.content);
            if let Some(source) = self.source {
                let mut metadata = HashMap::new();
                metadata.insert(SOURCE_METADATA_KEY.to_string(), Value::from(source));
                document.metadata = metadata;
            }
            yield Ok(document);
        };
        Ok(Box::pin(stream))
    }

    async fn load_and_split<TS: TextSplitter + 'static>(
        mut self,
        splitter: TS,
    ) -> Result<
        Pin<Box<dyn Stream<Item = Result<Document, LoaderError>> + Send + 'static>>,
        LoaderError,
    > {
        let doc_stream = self.load().await?;
        let stream = process_doc_stream(doc_stream, splitter).await;
        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;

    use super::*;
    use crate::text_splitter::CharacterTextSplitter;

    #[tokio::test]
    async fn test_text_loader() {
        let loader = TextLoader::from_string("hello world").with_source("inline");
        let documents = loader
            .load()
            .await
            .unwrap()
            .map(|d| d.unwrap())
            .collect::<Vec<_>>()
            .await;

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].page_content, "hello world");
        assert_eq!(documents[0].source(), Some("inline"));
    }

    #[tokio::test]
    async fn test_text_loader_load_and_split() {
        let loader = TextLoader::from_string("one two three four five six");
        let splitter = CharacterTextSplitter::new().with_chunk_size(10);
        let chunks = loader
            .load_and_split(splitter)
            .await
            .unwrap()
            .map(|d| d.unwrap())
            .collect::<Vec<_>>()
            .await;

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.page_content.chars().count() <= 10));
    }
}
