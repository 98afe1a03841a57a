use crate::model::{StudentId, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("This student already exists in the student list: {0}")]
    DuplicateStudent(StudentId),

    #[error("Requested student was not found in the student list.")]
    StudentNotFound,

    #[error("Invalid student record at position {index}: {source}")]
    PersistenceFormat {
        index: usize,
        source: ValidationError,
    },

    #[error("Invalid student record at position {index}: {source}")]
    RecordShape {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Roster file lists student {id} more than once (position {index})")]
    DuplicateRecord { index: usize, id: StudentId },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, RollcallError>;
