use crate::catalog::error::CatalogError;
use crate::catalog::table::Table;
use crate::catalog::table_scan::TableScan;
use crate::storage::row::Row;
use crate::storage::table_store::{RowId, TableStore};
use std::sync::Arc;

pub(crate) struct TableEntry {
    table: Table,
    store: Arc<TableStore>,
}

impl TableEntry {
    pub(crate) fn new(table: Table) -> Arc<TableEntry> {
        Arc::new(Self {
            table,
            store: Arc::new(TableStore::new()),
        })
    }

    pub(crate) fn insert(&self, row: Row) -> Result<RowId, CatalogError> {
        self.table
            .schema()
            .check_type_compatibility(row.column_values())?;
        Ok(self.store.insert(row))
    }

    /// Validates every row before storing any of them.
    pub(crate) fn insert_all(&self, rows: Vec<Row>) -> Result<Vec<RowId>, CatalogError> {
        for row in &rows {
            self.table
                .schema()
                .check_type_compatibility(row.column_values())?;
        }
        Ok(self.store.insert_all(rows))
    }

    pub(crate) fn get(&self, row_id: RowId) -> Option<Row> {
        self.store.get(row_id)
    }

    pub(crate) fn scan(&self) -> TableScan {
        TableScan::new(self.store.clone(), self.table.schema().clone())
    }

    pub(crate) fn table_name(&self) -> &str {
        self.table.name()
    }
}

#[cfg(test)]
impl TableEntry {
    fn row_count(&self) -> usize {
        self.store.len()
    }
}
