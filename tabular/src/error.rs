use std::result;
use thiserror::Error;

/// Errors that can occur when rendering a table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Row {row} has {actual} cells, expected {expected}")]
    StructuralMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{0}: {1}")]
    WithContext(String, Box<TableError>),
}

impl TableError {
    /// Add context to an error
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        TableError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TableError::StructuralMismatch {
                row,
                expected,
                actual,
            } => format!(
                "Row {} does not match the table layout: expected {} cells, found {}",
                row, expected, actual
            ),
            TableError::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = result::Result<T, TableError>;
