use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedderError {
    #[error("Error: {0}")]
    OtherError(String),
}
