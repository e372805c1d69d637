use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("account id is required for fetching transactions")]
    MissingAccountId,

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("API request failed with status code {status}: {body}")]
    Request { status: u16, body: String },

    #[error("failed to map API response record: {0}")]
    Mapping(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
