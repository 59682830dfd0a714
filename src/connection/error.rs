use crate::catalog::error::CatalogError;
use thiserror::Error;

/// Fatal problems with how a connection factory was set up.
///
/// These are raised before any connection is attempted.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("no driver registered under '{0}'")]
    UnknownDriver(String),
    #[error("malformed connection url '{0}'")]
    InvalidUrl(String),
    #[error("driver '{driver}' does not accept url '{url}'")]
    UnsupportedUrl { driver: String, url: String },
    #[error("driver '{0}' is already registered")]
    DuplicateDriver(String),
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while opening a connection or reading through it.
#[derive(Error, Debug, PartialEq)]
pub enum ConnectionError {
    #[error("database '{0}' does not exist")]
    DatabaseNotFound(String),
    #[error("authentication failed for user '{0}'")]
    AuthenticationFailed(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
