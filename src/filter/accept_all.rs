use crate::cursor::error::CursorError;
use crate::cursor::Cursor;
use crate::filter::RowFilter;
use crate::storage::row::Row;

/// Accepts every row. The default "no filtering" policy.
///
/// Holds no state, so any number of traversals can use it at once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AcceptAll;

pub const ACCEPT_ALL: AcceptAll = AcceptAll;

impl RowFilter for AcceptAll {
    fn init(&mut self, _cursor: &mut dyn Cursor) -> Result<(), CursorError> {
        Ok(())
    }

    fn tentative_accept(&mut self, _row: &Row) -> bool {
        true
    }

    fn accept_more(&self) -> bool {
        true
    }

    fn commit(&mut self, _accepted_by_all: bool) {}

    fn clear(&mut self) {}
}
