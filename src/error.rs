use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;

/// Why a single repository request did not produce a summary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("parse error: {0}")]
    Parse(String),
}
