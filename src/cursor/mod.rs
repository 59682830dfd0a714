//! Cursor abstraction over an open query result.
//!
//! A cursor starts *before* the first row. [`Cursor::advance`] moves it one row
//! forward; cursors that report [`Cursor::supports_random_access`] can also be
//! positioned directly with [`Cursor::absolute`]. Positions are 1-based.

pub mod error;
mod memory_cursor;

pub use memory_cursor::MemoryCursor;

use crate::cursor::error::CursorError;
use crate::schema::Schema;
use crate::storage::row::Row;
use serde::Deserialize;

/// Movement capability of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorKind {
    /// Only sequential advancement is allowed.
    #[default]
    ForwardOnly,
    /// Sequential advancement and absolute positioning are allowed.
    Scrollable,
}

impl CursorKind {
    pub fn supports_random_access(&self) -> bool {
        matches!(self, CursorKind::Scrollable)
    }
}

pub trait Cursor {
    /// Moves to the next row. Returns `false` once the cursor is past the last row.
    fn advance(&mut self) -> Result<bool, CursorError>;

    /// Positions the cursor on the given 1-based row.
    ///
    /// Returns `false` and leaves the cursor after the last row when `position`
    /// is beyond the result.
    fn absolute(&mut self, position: usize) -> Result<bool, CursorError>;

    /// The row under the cursor, if it is positioned on one.
    fn current(&self) -> Option<&Row>;

    /// 1-based position of the cursor; 0 means before the first row.
    fn position(&self) -> usize;

    fn supports_random_access(&self) -> bool;

    fn schema(&self) -> &Schema;

    fn is_on_row(&self) -> bool {
        self.current().is_some()
    }
}
