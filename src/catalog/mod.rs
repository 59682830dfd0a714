use crate::catalog::error::CatalogError;
use crate::catalog::table::Table;
use crate::catalog::table_entry::TableEntry;
use crate::schema::Schema;
use crate::storage::row::Row;
use crate::storage::table_store::RowId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

pub mod error;
pub(crate) mod table;
pub(crate) mod table_entry;
pub mod table_scan;

pub use table_scan::TableScan;

/// Named tables and their row stores.
pub struct Catalog {
    tables: RwLock<HashMap<String, Arc<TableEntry>>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Catalog {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    pub fn create_table(&self, name: &str, schema: Schema) -> Result<(), CatalogError> {
        let mut tables = self.tables.write().unwrap();

        if tables.contains_key(name) {
            return Err(CatalogError::TableAlreadyExists(name.to_string()));
        }

        tables.insert(name.to_string(), TableEntry::new(Table::new(name, schema)));
        Ok(())
    }

    pub fn insert_into(&self, table_name: &str, row: Row) -> Result<RowId, CatalogError> {
        let table_entry = self.table_entry_or_error(table_name)?;
        table_entry.insert(row)
    }

    pub fn insert_all_into(
        &self,
        table_name: &str,
        rows: Vec<Row>,
    ) -> Result<Vec<RowId>, CatalogError> {
        let table_entry = self.table_entry_or_error(table_name)?;
        table_entry.insert_all(rows)
    }

    pub fn get(&self, table_name: &str, row_id: RowId) -> Result<Option<Row>, CatalogError> {
        let table_entry = self.table_entry_or_error(table_name)?;
        Ok(table_entry.get(row_id))
    }

    pub fn scan(&self, table_name: &str) -> Result<TableScan, CatalogError> {
        let table_entry = self.table_entry_or_error(table_name)?;
        Ok(table_entry.scan())
    }

    /// Names of all tables, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let guard = self.tables.read().unwrap();
        let mut names: Vec<String> = guard
            .values()
            .map(|entry| entry.table_name().to_string())
            .collect();
        names.sort();
        names
    }

    fn table_entry_or_error(&self, table_name: &str) -> Result<Arc<TableEntry>, CatalogError> {
        self.table_entry(table_name)
            .ok_or_else(|| CatalogError::TableDoesNotExist(table_name.to_string()))
    }

    fn table_entry(&self, name: &str) -> Option<Arc<TableEntry>> {
        let guard = self.tables.read().unwrap();
        guard.get(name).cloned()
    }
}
