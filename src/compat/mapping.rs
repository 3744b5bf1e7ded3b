//! Static tables mapping historical namespace paths to current ones.
//!
//! Three eras exist. Before 0.2 every serializable type lived in the flat
//! `docindex::schema` module; 0.2 split the crate into per-concern modules.
//! Older still is the pre-release layout with types at the crate root. The
//! JavaScript sibling library serializes shortened module paths and shares
//! envelopes with this crate.
//!
//! The tables are populated at compile time and never mutated. Resolution
//! consults them in priority order; see [`super::resolve`].

/// A namespace path: ordered components identifying a serializable type.
pub type NamespacePath = &'static [&'static str];

/// One era's relocation table.
pub type MappingTable = &'static [(NamespacePath, NamespacePath)];

/// Primary table: paths serialized by 0.1.x releases (`docindex::schema` era).
pub static SERIALIZABLE_MAPPING: MappingTable = &[
    (
        &["docindex", "schema", "Document"],
        &["docindex", "schemas", "document", "Document"],
    ),
    (
        &["docindex", "schema", "SourcedAnswer"],
        &["docindex", "chain", "qa_with_sources", "SourcedAnswer"],
    ),
    (
        &["docindex", "schema", "SplitterOptions"],
        &["docindex", "text_splitter", "options", "SplitterOptions"],
    ),
    (
        &["docindex", "schema", "CharacterTextSplitterOptions"],
        &[
            "docindex",
            "text_splitter",
            "character_splitter",
            "CharacterTextSplitterOptions",
        ],
    ),
    (
        &["docindex", "schema", "VecStoreOptions"],
        &["docindex", "vectorstore", "options", "VecStoreOptions"],
    ),
    (
        &["docindex", "schema", "RetrieverOptions"],
        &[
            "docindex",
            "retrievers",
            "vectorstore_retriever",
            "RetrieverOptions",
        ],
    ),
    (
        &["docindex", "embeddings", "FakeEmbedder"],
        &["docindex", "embedding", "fake_embedder", "FakeEmbedder"],
    ),
    (
        &["docindex", "models", "FakeLLM"],
        &["docindex", "language_models", "fake_llm", "FakeLLM"],
    ),
];

/// Legacy table: pre-release layout with types at the crate root.
pub static OG_SERIALIZABLE_MAPPING: MappingTable = &[
    (
        &["docindex", "Document"],
        &["docindex", "schemas", "document", "Document"],
    ),
    (
        &["docindex", "SourcedAnswer"],
        &["docindex", "chain", "qa_with_sources", "SourcedAnswer"],
    ),
    (
        &["docindex", "SplitterOptions"],
        &["docindex", "text_splitter", "options", "SplitterOptions"],
    ),
    (
        &["docindex", "VecStoreOptions"],
        &["docindex", "vectorstore", "options", "VecStoreOptions"],
    ),
];

/// Cross-runtime table: shortened paths written by the JavaScript sibling.
pub static JS_SERIALIZABLE_MAPPING: MappingTable = &[
    (
        &["docindex", "schemas", "Document"],
        &["docindex", "schemas", "document", "Document"],
    ),
    (
        &["docindex", "chain", "SourcedAnswer"],
        &["docindex", "chain", "qa_with_sources", "SourcedAnswer"],
    ),
    (
        &["docindex", "text_splitter", "SplitterOptions"],
        &["docindex", "text_splitter", "options", "SplitterOptions"],
    ),
    (
        &["docindex", "retrievers", "RetrieverOptions"],
        &[
            "docindex",
            "retrievers",
            "vectorstore_retriever",
            "RetrieverOptions",
        ],
    ),
];
