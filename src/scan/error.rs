use crate::connection::error::ConnectionError;
use crate::cursor::error::CursorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error(transparent)]
    Cursor(#[from] CursorError),
}
