use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    /// Key is outside the orderable scalar domain (NaN, non-numeric JSON,
    /// out-of-range integer). Raised before the tree is touched.
    #[error("invalid key type: {0}")]
    InvalidKeyType(String),
    #[error("tree is empty")]
    EmptyTree,
    #[error("unknown duplicate policy: {0}")]
    UnknownPolicy(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T, E = AvlError> = std::result::Result<T, E>;
