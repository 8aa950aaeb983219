use thiserror::Error;

/// Errors produced while building a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid bucket count {0}: a table needs at least one bucket")]
    InvalidCapacity(usize),
}

pub type Result<T> = std::result::Result<T, TableError>;
