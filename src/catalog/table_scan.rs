use crate::cursor::{CursorKind, MemoryCursor};
use crate::schema::Schema;
use crate::storage::table_store::TableStore;
use std::sync::Arc;

/// A handle to a table that opens cursors over it.
///
/// The scan keeps the store alive but does not read it until a cursor is
/// opened; each cursor owns a snapshot of the rows present at that moment.
pub struct TableScan {
    store: Arc<TableStore>,
    schema: Arc<Schema>,
}

impl TableScan {
    pub(crate) fn new(store: Arc<TableStore>, schema: Arc<Schema>) -> Self {
        Self { store, schema }
    }

    pub fn cursor(&self, kind: CursorKind) -> MemoryCursor {
        MemoryCursor::new(self.store.snapshot(), self.schema.clone(), kind)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
