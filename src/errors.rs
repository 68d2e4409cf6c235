use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteMgrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Policy serialization error: {0}")]
    Policy(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, SiteMgrError>;
