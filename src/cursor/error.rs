use thiserror::Error;

/// Data-access failures raised while moving a [`Cursor`](crate::cursor::Cursor).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is forward-only and cannot be positioned directly")]
    RandomAccessNotSupported,
    #[error("invalid cursor position {0}, positions start at 1")]
    InvalidPosition(usize),
    #[error("cursor exhausted before reaching offset {offset}")]
    ExhaustedBeforeOffset { offset: usize },
}
