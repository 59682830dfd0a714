use crate::types::column_type::ColumnType;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("column '{0}' is already defined")]
    DuplicateColumnName(String),
    #[error("expected {expected} column values, found {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },
    #[error("column '{column}' expects {expected:?}, found {actual:?}")]
    ColumnTypeMismatch {
        column: String,
        expected: ColumnType,
        actual: ColumnType,
    },
}
