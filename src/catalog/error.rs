use crate::schema::error::SchemaError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("table '{0}' already exists")]
    TableAlreadyExists(String),
    #[error("table '{0}' does not exist")]
    TableDoesNotExist(String),
    #[error("row does not match the table schema: {0}")]
    Schema(#[from] SchemaError),
}
