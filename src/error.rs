use thiserror::Error;

#[derive(Error, Debug)]
pub enum CifraError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid Base64 input: {0}")]
    InvalidBase64(String),
}

pub type Result<T> = std::result::Result<T, CifraError>;
