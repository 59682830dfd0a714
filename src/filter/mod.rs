//! Row filters decide, row by row, what a cursor traversal materializes.
//!
//! A traversal drives a filter in a fixed order:
//!
//! ```text
//! init(cursor)
//! for each visited row:
//!     tentative_accept(row)   every filter in a chain votes
//!     commit(accepted_by_all) every filter learns the final decision
//!     accept_more()           false lets the traversal stop early
//! clear()                     before the filter is reused
//! ```
//!
//! Voting and committing are separate so that a filter which keeps counters
//! can undo its speculative bookkeeping when a sibling filter rejects a row it
//! accepted.

mod accept_all;
mod chain;
pub mod error;
mod page;
mod predicate;

pub use accept_all::{AcceptAll, ACCEPT_ALL};
pub use chain::FilterChain;
pub use page::PageFilter;
pub use predicate::{ColumnPattern, PredicateFilter, RowPredicate};

use crate::cursor::error::CursorError;
use crate::cursor::Cursor;
use crate::storage::row::Row;

pub trait RowFilter: Send {
    /// Prepares the filter before the first row is visited.
    ///
    /// Filters may position the cursor here. The traversal only advances the
    /// cursor itself if it is still before the first row afterwards.
    fn init(&mut self, cursor: &mut dyn Cursor) -> Result<(), CursorError>;

    /// Votes on the current row. Must not move the cursor.
    fn tentative_accept(&mut self, row: &Row) -> bool;

    /// Returns `false` once no later row can be accepted.
    fn accept_more(&self) -> bool;

    /// Receives the final decision for the row just voted on.
    fn commit(&mut self, accepted_by_all: bool);

    /// Resets the filter for a fresh traversal.
    fn clear(&mut self);
}

impl<F: RowFilter + ?Sized> RowFilter for Box<F> {
    fn init(&mut self, cursor: &mut dyn Cursor) -> Result<(), CursorError> {
        (**self).init(cursor)
    }

    fn tentative_accept(&mut self, row: &Row) -> bool {
        (**self).tentative_accept(row)
    }

    fn accept_more(&self) -> bool {
        (**self).accept_more()
    }

    fn commit(&mut self, accepted_by_all: bool) {
        (**self).commit(accepted_by_all)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
