use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashTableError {
    /// No entry with this value in the key's bucket, or the bucket is empty.
    #[error("item {value} with key value {key} is not present (bucket {bucket})")]
    NotFound { value: i32, key: i32, bucket: usize },
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}
