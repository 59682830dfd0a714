use crate::storage::row::Row;
use crossbeam_skiplist::SkipMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::AcqRel;

pub type RowId = u64;

/// Concurrent, insertion-ordered row storage for a single table.
///
/// Rows are keyed by a monotonically increasing [`RowId`] starting at 1, so
/// iterating the skip list yields rows in insertion order.
pub(crate) struct TableStore {
    entries: SkipMap<RowId, Row>,
    current_row_id: AtomicU64,
}

impl TableStore {
    pub(crate) fn new() -> TableStore {
        Self {
            entries: SkipMap::new(),
            current_row_id: AtomicU64::new(1),
        }
    }

    pub(crate) fn insert_all(&self, rows: Vec<Row>) -> Vec<RowId> {
        rows.into_iter().map(|row| self.insert(row)).collect()
    }

    pub(crate) fn insert(&self, row: Row) -> RowId {
        let row_id = self.current_row_id.fetch_add(1, AcqRel);
        self.entries.insert(row_id, row);
        row_id
    }

    pub(crate) fn get(&self, row_id: RowId) -> Option<Row> {
        self.entries.get(&row_id).map(|entry| entry.value().clone())
    }

    /// Copies the rows visible at the time of the call, in row id order.
    pub(crate) fn snapshot(&self) -> Vec<Row> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[cfg(test)]
impl TableStore {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{row, rows};

    #[test]
    fn insert_row_and_get_row_id() {
        let store = TableStore::new();
        let row_id = store.insert(row![10, "relscan"]);

        assert_eq!(1, row_id);
    }

    #[test]
    fn insert_rows_and_get_increasing_row_ids() {
        let store = TableStore::new();
        let row_ids = store.insert_all(rows![[10, "relscan"], [20, "page"]]);

        assert_eq!(vec![1, 2], row_ids);
        assert_eq!(2, store.len());
    }

    #[test]
    fn insert_rows_and_snapshot_in_insertion_order() {
        let store = TableStore::new();
        store.insert_all(rows![[10, "relscan"], [20, "page"], [30, "cursor"]]);

        let rows = store.snapshot();
        assert_eq!(rows![[10, "relscan"], [20, "page"], [30, "cursor"]], rows);
    }

    #[test]
    fn snapshot_does_not_observe_later_inserts() {
        let store = TableStore::new();
        store.insert(row![10]);

        let rows = store.snapshot();
        store.insert(row![20]);

        assert_eq!(1, rows.len());
        assert_eq!(2, store.len());
    }

    #[test]
    fn insert_row_and_get_by_row_id() {
        let store = TableStore::new();
        let row_id = store.insert(row![10, "relscan"]);

        assert_eq!(row![10, "relscan"], store.get(row_id).unwrap());
    }

    #[test]
    fn insert_row_and_attempt_to_get_by_non_existent_row_id() {
        let store = TableStore::new();
        store.insert(row![10, "relscan"]);

        assert!(store.get(1000).is_none());
    }
}
