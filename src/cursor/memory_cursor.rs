use crate::cursor::error::CursorError;
use crate::cursor::{Cursor, CursorKind};
use crate::schema::Schema;
use crate::storage::row::Row;
use std::sync::Arc;

/// A cursor over an owned snapshot of rows.
pub struct MemoryCursor {
    rows: Vec<Row>,
    schema: Arc<Schema>,
    kind: CursorKind,
    position: usize,
}

impl MemoryCursor {
    pub fn new(rows: Vec<Row>, schema: Arc<Schema>, kind: CursorKind) -> Self {
        Self {
            rows,
            schema,
            kind,
            position: 0,
        }
    }

    pub fn forward_only(rows: Vec<Row>, schema: Arc<Schema>) -> Self {
        Self::new(rows, schema, CursorKind::ForwardOnly)
    }

    pub fn scrollable(rows: Vec<Row>, schema: Arc<Schema>) -> Self {
        Self::new(rows, schema, CursorKind::Scrollable)
    }

    pub fn kind(&self) -> CursorKind {
        self.kind
    }

    fn after_last(&self) -> usize {
        self.rows.len() + 1
    }
}

impl Cursor for MemoryCursor {
    fn advance(&mut self) -> Result<bool, CursorError> {
        if self.position < self.after_last() {
            self.position += 1;
        }
        Ok(self.position <= self.rows.len())
    }

    fn absolute(&mut self, position: usize) -> Result<bool, CursorError> {
        if !self.kind.supports_random_access() {
            return Err(CursorError::RandomAccessNotSupported);
        }
        if position == 0 {
            return Err(CursorError::InvalidPosition(position));
        }
        if position > self.rows.len() {
            self.position = self.after_last();
            return Ok(false);
        }
        self.position = position;
        Ok(true)
    }

    fn current(&self) -> Option<&Row> {
        if self.position == 0 {
            return None;
        }
        self.rows.get(self.position - 1)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn supports_random_access(&self) -> bool {
        self.kind.supports_random_access()
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }
}
