mod error;
pub use error::*;

mod text_loader;
pub use text_loader::*;

mod csv_loader;
pub use csv_loader::*;

use std::pin::Pin;

use async_stream::stream;
use async_trait::async_trait;
use futures::Stream;
use futures_util::StreamExt;

use crate::schemas::Document;
use crate::text_splitter::TextSplitter;

/// A finite, lazily-produced sequence of documents.
///
/// Loading consumes the loader; callers needing to re-load construct a new
/// loader. Documents are yielded in production order.
#[async_trait]
pub trait Loader: Send + Sync {
    async fn load(
        mut self,
    ) -> Result<
        Pin<Box<dyn Stream<Item = Result<Document, LoaderError>> + Send + 'static>>,
        LoaderError,
    >;

    async fn load_and_split<TS: TextSplitter + 'static>(
        mut self,
        splitter: TS,
    ) -> Result<
        Pin<Box<dyn Stream<Item = Result<Document, LoaderError>> + Send + 'static>>,
        LoaderError,
    >;
}

/// Runs every document from `doc_stream` through `splitter`, yielding the
/// resulting chunks in order.
pub(crate) async fn process_doc_stream<TS: TextSplitter + 'static>(
    doc_stream: Pin<Box<dyn Stream<Item = Result<Document, LoaderError>> + Send + 'static>>,
    splitter: TS,
) -> impl Stream<Item = Result<Document, LoaderError>> {
    stream! {
        let mut doc_stream = doc_stream;
        while let Some(next) = doc_stream.next().await {
            match next {
                Ok(doc) => match splitter.split_documents(&[doc]).await {
                    Ok(chunks) => {
                        for chunk in chunks {
                            yield Ok(chunk);
                        }
                    }
                    Err(e) => yield Err(LoaderError::TextSplitterError(e)),
                },
                Err(e) => yield Err(e),
            }
        }
    }
}
