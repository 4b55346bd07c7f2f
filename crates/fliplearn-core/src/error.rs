use fliplearn_types::ErrorKind;

use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("index {index} is out of range (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("a set named '{0}' already exists")]
    NameTaken(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::EmptyInput { .. } => ErrorKind::EmptyInput,
            CoreError::IndexOutOfBounds { .. } => ErrorKind::OutOfRange,
            CoreError::NameTaken(_) => ErrorKind::NameTaken,
            CoreError::Storage(_) => ErrorKind::StorageUnavailable,
        }
    }
}
