//! # docindex
//!
//! Document indexing and retrieval-augmented question answering in Rust.
//!
//! ## Overview
//!
//! - **Indexing** — [`indexing::VectorStoreIndexCreator`] splits documents into
//!   chunks, embeds them, and builds a queryable [`indexing::VectorStoreIndexWrapper`]
//! - **Querying** — retrieval-augmented QA over the index with any [`language_models::LLM`],
//!   with or without source attribution
//! - **Trait seams** — [`embedding::Embedder`], [`text_splitter::TextSplitter`],
//!   [`vectorstore::VectorStore`], [`document_loaders::Loader`], [`schemas::Retriever`]
//! - **Compatibility** — [`compat::resolve`] maps namespace paths persisted by
//!   older releases to their current location during deserialization
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! docindex = "0.3"
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use docindex::embedding::FakeEmbedder;
//! use docindex::indexing::VectorStoreIndexCreator;
//! use docindex::retrievers::RetrieverOptions;
//! use docindex::schemas::Document;
//!
//! # async fn run(llm: Box<dyn docindex::language_models::LLM>) -> Result<(), Box<dyn std::error::Error>> {
//! let creator = VectorStoreIndexCreator::builder()
//!     .embedder(FakeEmbedder::new())
//!     .build()?;
//! let index = creator
//!     .from_documents(&[Document::new("cats are mammals")])
//!     .await?;
//! let answer = index
//!     .query("are cats mammals?", Some(llm), &RetrieverOptions::default())
//!     .await?;
//! # Ok(()) }
//! ```

/// Retrieval-augmented QA chains over a retriever and an LLM.
pub mod chain;
/// Versioned-namespace resolution for deserializing persisted objects.
pub mod compat;
/// Document loaders: plain text and CSV.
pub mod document_loaders;
/// Embedding provider trait and the deterministic fake embedder.
pub mod embedding;
/// Unified error type.
pub mod error;
/// Index construction and the query-capable index wrapper.
pub mod indexing;
/// Language model trait and the fake model for tests.
pub mod language_models;
/// Retrievers over vector stores.
pub mod retrievers;
/// Schemas: documents and the retriever trait.
pub mod schemas;
/// Text splitters: character and token based.
pub mod text_splitter;
/// Utilities: similarity math, blocking bridge.
pub mod utils;
/// Vector store trait, options, factories, and the in-memory store.
pub mod vectorstore;
