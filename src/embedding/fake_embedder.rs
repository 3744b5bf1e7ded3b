use async_trait::async_trait;
use sha2::{Digest, Sha256};

use super::{Embedder, EmbedderError};

/// Deterministic embedder for tests and demos.
///
/// Each text is hashed with SHA-256 and the digest bytes are folded into a
/// fixed-dimension vector, so identical inputs always produce element-wise
/// identical vectors. The geometry is meaningless; only determinism and the
/// one-vector-per-text contract matter.
#[derive(Debug, Clone)]
pub struct FakeEmbedder {
    dimensions: usize,
}

impl FakeEmbedder {
    pub fn new() -> Self {
        FakeEmbedder { dimensions: 8 }
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions.max(1);
        self
    }

    fn embed_text(&self, text: &str) -> Vec<f64> {
        let digest = Sha256::digest(text.as_bytes());
        (0..self.dimensions)
            .map(|i| {
                // Walk the digest cyclically, mixing the position in so
                // dimensions beyond 32 are not simple repeats.
                let byte = digest[i % digest.len()];
                let mixed = byte.wrapping_add((i / digest.len()) as u8);
                f64::from(mixed) / 255.0
            })
            .collect()
    }
}

impl Default for FakeEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for FakeEmbedder {
    async fn embed_documents(&self, documents: &[String]) -> Result<Vec<Vec<f64>>, EmbedderError> {
        Ok(documents.iter().map(|text| self.embed_text(text)).collect())
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f64>, EmbedderError> {
        Ok(self.embed_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_embedder_deterministic() {
        let embedder = FakeEmbedder::new();
        let texts = vec!["cats are mammals".to_string(), "rocks are not alive".to_string()];
        let first = embedder.embed_documents(&texts).await.unwrap();
        let second = embedder.embed_documents(&texts).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fake_embedder_fixed_dimensions() {
        let embedder = FakeEmbedder::new().with_dimensions(40);
        let vectors = embedder
            .embed_documents(&["a".to_string(), "a much longer text".to_string()])
            .await
            .unwrap();
        assert!(vectors.iter().all(|v| v.len() == 40));
    }

    #[tokio::test]
    async fn test_fake_embedder_query_matches_documents() {
        let embedder = FakeEmbedder::new();
        let from_docs = embedder.embed_documents(&["hello".to_string()]).await.unwrap();
        let from_query = embedder.embed_query("hello").await.unwrap();
        assert_eq!(from_docs[0], from_query);
    }
}
