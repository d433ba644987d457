use alloc::string::String;
use thiserror::Error;

use crate::SchemaVersion;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BingoError {
    #[error("Board size must be at least 1")]
    InvalidSize,
    #[error("Label pool too small, board needs {required} labels but only {available} given")]
    InsufficientLabels { required: usize, available: usize },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board is not square or is too large")]
    InvalidBoardShape,
    #[error("Stored state is malformed: {0}")]
    MalformedStoredState(String),
    #[error("Stored state uses the {found:?} schema, expected {expected:?}")]
    SchemaMismatch {
        expected: SchemaVersion,
        found: SchemaVersion,
    },
    #[error("No session storage available")]
    NoSessionScope,
    #[error("Session storage failed: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, BingoError>;
