use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("column '{0}' does not exist")]
    UnknownColumn(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
