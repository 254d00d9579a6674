use rcw_core::error::format_err_chain;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("item is not a JSON object")]
    NotAnObject,

    #[error("unsupported attribute value: {0}")]
    UnsupportedAttribute(String),

    #[error("invalid continuation token: {0}")]
    InvalidToken(String),

    #[error("DynamoDB PutItem error: {0}")]
    PutItem(String),

    #[error("DynamoDB Scan error: {0}")]
    Scan(String),
}

impl StorageError {
    /// A failed PutItem call, with the SDK error's full cause chain.
    pub fn put_item(err: &dyn std::error::Error) -> Self {
        Self::PutItem(format_err_chain(err))
    }

    /// A failed Scan call, with the SDK error's full cause chain.
    pub fn scan(err: &dyn std::error::Error) -> Self {
        Self::Scan(format_err_chain(err))
    }

    /// True for faults caused by the caller's input rather than the backend.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::InvalidToken(_))
    }
}
