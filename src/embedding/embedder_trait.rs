use async_trait::async_trait;

use super::EmbedderError;

/// An embedding provider: ordered texts in, ordered vectors out, one-to-one.
///
/// All vectors produced by one embedder instance have the same dimensionality;
/// an index never mixes vectors from different embedders.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed_documents(&self, documents: &[String]) -> Result<Vec<Vec<f64>>, EmbedderError>;
    async fn embed_query(&self, text: &str) -> Result<Vec<f64>, EmbedderError>;
}
