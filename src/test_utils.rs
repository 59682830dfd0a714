use crate::cursor::error::CursorError;
use crate::cursor::{Cursor, MemoryCursor};
use crate::row;
use crate::schema::Schema;
use crate::storage::row::Row;
use crate::types::column_type::ColumnType;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// A single `id` integer column.
pub fn id_schema() -> Arc<Schema> {
    Arc::new(Schema::new().add_column("id", ColumnType::Int).unwrap())
}

/// One single-column row per id in the range.
pub fn id_rows(ids: RangeInclusive<i64>) -> Vec<Row> {
    ids.map(|id| row![id]).collect()
}

/// Wraps a [`MemoryCursor`] and records how it was moved.
pub struct RecordingCursor {
    inner: MemoryCursor,
    advance_calls: usize,
    absolute_calls: Vec<usize>,
}

impl RecordingCursor {
    pub fn forward_only(rows: Vec<Row>) -> Self {
        Self::wrap(MemoryCursor::forward_only(rows, id_schema()))
    }

    pub fn scrollable(rows: Vec<Row>) -> Self {
        Self::wrap(MemoryCursor::scrollable(rows, id_schema()))
    }

    fn wrap(inner: MemoryCursor) -> Self {
        Self {
            inner,
            advance_calls: 0,
            absolute_calls: Vec::new(),
        }
    }

    pub fn advance_calls(&self) -> usize {
        self.advance_calls
    }

    pub fn absolute_calls(&self) -> Vec<usize> {
        self.absolute_calls.clone()
    }
}

impl Cursor for RecordingCursor {
    fn advance(&mut self) -> Result<bool, CursorError> {
        self.advance_calls += 1;
        self.inner.advance()
    }

    fn absolute(&mut self, position: usize) -> Result<bool, CursorError> {
        self.absolute_calls.push(position);
        self.inner.absolute(position)
    }

    fn current(&self) -> Option<&Row> {
        self.inner.current()
    }

    fn position(&self) -> usize {
        self.inner.position()
    }

    fn supports_random_access(&self) -> bool {
        self.inner.supports_random_access()
    }

    fn schema(&self) -> &Schema {
        self.inner.schema()
    }
}
