use serde_json::Value;

/// Per-call options for vector store operations.
///
/// There is deliberately no per-call embedder override: a store embeds with
/// the embedder it was built with, so an index never holds vectors from more
/// than one provider.
#[derive(Debug, Clone, Default)]
pub struct VecStoreOptions {
    /// Logical partition within the store.
    pub name_space: Option<String>,
    /// Minimum similarity score for search results.
    pub score_threshold: Option<f32>,
    /// Exact-match metadata filters as a JSON object.
    pub filters: Option<Value>,
}

impl VecStoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_space<S: Into<String>>(mut self, name_space: S) -> Self {
        self.name_space = Some(name_space.into());
        self
    }

    pub fn with_score_threshold(mut self, score_threshold: f32) -> Self {
        self.score_threshold = Some(score_threshold);
        self
    }

    pub fn with_filters(mut self, filters: Value) -> Self {
        self.filters = Some(filters);
        self
    }
}
