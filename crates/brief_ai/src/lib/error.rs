use text_source::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid URL")]
    InvalidReference,
    #[error("Failed to extract text: {0}")]
    Extraction(#[source] SourceError),
    #[error("No text could be extracted from {0}")]
    EmptyText(String),
}

impl From<SourceError> for Error {
    fn from(value: SourceError) -> Self {
        match value {
            SourceError::InvalidUrl => Error::InvalidReference,
            other => Error::Extraction(other),
        }
    }
}
