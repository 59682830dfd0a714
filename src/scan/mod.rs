//! Drives a [`RowFilter`] over a [`Cursor`] and materializes the accepted rows.

pub mod error;
mod result_set;

pub use result_set::ResultSet;

use crate::connection::Connection;
use crate::cursor::error::CursorError;
use crate::cursor::{Cursor, CursorKind};
use crate::filter::{PageFilter, RowFilter};
use crate::scan::error::ScanError;
use tracing::{debug, trace};

/// One traversal of a cursor under a filter.
///
/// The filter is borrowed, so a caller can [`clear`](RowFilter::clear) and
/// reuse it for another traversal afterwards.
pub struct FilteredScan<'a> {
    cursor: &'a mut dyn Cursor,
    filter: &'a mut dyn RowFilter,
}

impl<'a> FilteredScan<'a> {
    pub fn new(cursor: &'a mut dyn Cursor, filter: &'a mut dyn RowFilter) -> Self {
        Self { cursor, filter }
    }

    /// Runs the traversal.
    ///
    /// The cursor is advanced onto the first row only if the filter's `init`
    /// left it before the first row. The traversal ends when the cursor runs
    /// out of rows or the filter stops wanting more.
    pub fn execute(self) -> Result<ResultSet, CursorError> {
        self.filter.init(self.cursor)?;
        if self.cursor.position() == 0 {
            self.cursor.advance()?;
        }

        let mut rows = Vec::new();
        let mut rows_visited = 0;

        if self.filter.accept_more() {
            while let Some(row) = self.cursor.current() {
                rows_visited += 1;

                let accepted = self.filter.tentative_accept(row);
                self.filter.commit(accepted);
                trace!(position = self.cursor.position(), accepted, "row visited");
                if accepted {
                    rows.push(row.clone());
                }

                if !self.filter.accept_more() {
                    break;
                }
                self.cursor.advance()?;
            }
        }

        debug!(
            rows_visited,
            rows_accepted = rows.len(),
            "filtered scan finished"
        );
        Ok(ResultSet::new(
            self.cursor.schema().clone(),
            rows,
            rows_visited,
        ))
    }
}

/// Opens a cursor on `table_name` and scans it with `filter`.
pub fn fetch_filtered(
    connection: &dyn Connection,
    table_name: &str,
    kind: CursorKind,
    filter: &mut dyn RowFilter,
) -> Result<ResultSet, ScanError> {
    let mut cursor = connection.open_cursor(table_name, kind)?;
    let result_set = FilteredScan::new(cursor.as_mut(), filter).execute()?;
    Ok(result_set)
}

/// Reads the zero-based page `page_number` of `table_name`.
pub fn fetch_page(
    connection: &dyn Connection,
    table_name: &str,
    kind: CursorKind,
    page_number: usize,
    page_size: usize,
) -> Result<ResultSet, ScanError> {
    let mut filter = PageFilter::new(page_number, page_size);
    fetch_filtered(connection, table_name, kind, &mut filter)
}
