use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use std::pin::Pin;

use async_stream::stream;
use async_trait::async_trait;
use futures::Stream;
use serde_json::Value;

use super::{process_doc_stream, Loader, LoaderError};
use crate::schemas::Document;
use crate::text_splitter::TextSplitter;

/// Loads delimited records as one document per row.
///
/// Each document's content lists `header: value` lines for the selected
/// columns; `row` metadata carries the 1-based row number.
#[derive(Debug, Clone)]
pub struct CsvLoader<R> {
    reader: R,
    delimiter: u8,
    columns: Option<Vec<String>>,
}

impl<R: Read> CsvLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            delimiter: b',',
            columns: None,
        }
    }

    /// Use a different field delimiter, e.g. `b'\t'` for TSV input.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Keep only the named columns (all columns when unset).
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }
}

impl CsvLoader<Cursor<Vec<u8>>> {
    pub fn from_string<S: Into<String>>(input: S) -> Self {
        let input = input.into();
        Self::new(Cursor::new(input.into_bytes()))
    }
}

impl CsvLoader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

#[async_trait]
impl<R: Read + Send + Sync + 'static> Loader for CsvLoader<R> {
    async fn load(
        mut self,
    ) -> Result<
        Pin<Box<dyn Stream<Item = Result<Document, LoaderError>> + Send + 'static>>,
        LoaderError,
    > {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(self.reader);

        let headers = reader.headers()?.clone();
        let columns = self.columns.clone();
        let mut row_number: i64 = 0;

        let stream = stream! {
            for result in reader.records() {
                let record = match result {
                    Ok(record) => record,
                    Err(e) => {
                        yield Err(LoaderError::from(e));
                        continue;
                    }
                };
                let mut content = String::new();

                for (i, field) in record.iter().enumerate() {
                    let header = &headers[i];
                    if let Some(ref cols) = columns {
                        if !cols.iter().any(|c| c == header) {
                            continue;
                        }
                    }
                    content.push_str(&format!("{}: {}\n", header, field));
                }

                row_number += 1;

                let mut metadata = HashMap::new();
                metadata.insert("row".to_string(), Value::from(row_number));
                metadata.insert("source_type".to_string(), Value::from("csv"));

                yield Ok(Document::new(content).with_metadata(metadata));
            }
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

    #[tokio::test]
    async fn test_csv_loader() {
        let input = "name,age,city\nJohn,30,New York\nJane,25,London";
        let loader = CsvLoader::from_string(input);

        let documents = loader
            .load()
            .await
            .unwrap()
            .map(|d| d.unwrap())
            .collect::<Vec<_>>()
            .await;

        assert_eq!(documents.len(), 2);
        assert!(documents[0].page_content.contains("John"));
        assert_eq!(documents[0].metadata.get("row").unwrap(), &Value::from(1));
        assert_eq!(documents[1].metadata.get("row").unwrap(), &Value::from(2));
    }

    #[tokio::test]
    async fn test_csv_loader_tab_delimiter() {
        let input = "name\tage\nJohn\t30";
        let loader = CsvLoader::from_string(input).with_delimiter(b'\t');

        let documents = loader
            .load()
            .await
            .unwrap()
            .map(|d| d.unwrap())
            .collect::<Vec<_>>()
            .await;

        assert_eq!(documents.len(), 1);
        assert!(documents[0].page_content.contains("age: 30"));
    }

    #[tokio::test]
    async fn test_csv_loader_column_filter() {
        let input = "name,age\nJohn,30";
        let loader = CsvLoader::from_string(input).with_columns(vec!["name".to_string()]);

        let documents = loader
            .load()
            .await
            .unwrap()
            .map(|d| d.unwrap())
            .collect::<Vec<_>>()
            .await;

        assert!(documents[0].page_content.contains("name: John"));
        assert!(!documents[0].page_content.contains("age"));
    }
}
