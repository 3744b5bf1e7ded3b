use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata key under which loaders record where a document came from.
///
/// `query_with_sources` enumerates the distinct values of this key across the
/// chunks used to answer a question.
pub const SOURCE_METADATA_KEY: &str = "source";

/// A piece of text plus arbitrary metadata.
///
/// Documents are produced by loaders and consumed by splitters, embedders,
/// and vector stores. Pipeline stages never mutate their inputs; splitting
/// produces new `Document`s that inherit the parent's metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub page_content: String,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    /// Similarity score assigned by a vector store search, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Document {
    pub fn new<S: Into<String>>(page_content: S) -> Self {
        Document {
            page_content: page_content.into(),
            metadata: HashMap::new(),
            score: None,
        }
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// The `source` metadata value, when present and a string.
    pub fn source(&self) -> Option<&str> {
        self.metadata.get(SOURCE_METADATA_KEY).and_then(Value::as_str)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_new() {
        let doc = Document::new("hello");
        assert_eq!(doc.page_content, "hello");
        assert!(doc.metadata.is_empty());
        assert!(doc.score.is_none());
    }

    #[test]
    fn test_document_source() {
        let mut metadata = HashMap::new();
        metadata.insert(SOURCE_METADATA_KEY.to_string(), json!("a.txt"));
        let doc = Document::new("hello").with_metadata(metadata);
        assert_eq!(doc.source(), Some("a.txt"));
        assert_eq!(Document::new("x").source(), None);
    }

    #[test]
    fn test_document_serde_roundtrip() {
        let mut metadata = HashMap::new();
        metadata.insert("row".to_string(), json!(3));
        let doc = Document::new("hello").with_metadata(metadata);
        let encoded = serde_json::to_string(&doc).unwrap();
        let decoded: Document = serde_json::from_str(&encoded).unwrap();
        assert_eq!(doc, decoded);
    }
}
