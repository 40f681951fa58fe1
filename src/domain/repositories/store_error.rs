//! Errors raised by flat-file stores.

use thiserror::Error;

/// Failure reading or writing a backing store.
///
/// Kept distinct from business outcomes such as "account does not exist":
/// a store that cannot be read says nothing about which accounts exist.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store format error: {0}")]
    Csv(#[from] csv::Error),
    #[error("store task failed: {0}")]
    Task(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
