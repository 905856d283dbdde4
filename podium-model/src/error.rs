use std::fmt::{self, Display};

/// Errors produced when parsing model-level values from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownSortKey(String),
    UnknownSortDirection(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownSortKey(key) => {
                write!(f, "unknown sort key: {key}")
            }
            ModelError::UnknownSortDirection(dir) => {
                write!(f, "unknown sort direction: {dir} (expected asc or desc)")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
