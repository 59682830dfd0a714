use crate::cursor::error::CursorError;
use crate::cursor::Cursor;
use crate::filter::RowFilter;
use crate::storage::row::Row;

/// A composed filter chain: a row is accepted only if every member accepts it.
///
/// Every member votes on every row, even after an earlier member rejected it,
/// so that each one can settle its own bookkeeping when the final decision is
/// committed. At most one member should position the cursor in `init`.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn RowFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn with<F: RowFilter + 'static>(mut self, filter: F) -> Self {
        self.push(filter);
        self
    }

    pub fn push<F: RowFilter + 'static>(&mut self, filter: F) {
        self.filters.push(Box::new(filter));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl RowFilter for FilterChain {
    fn init(&mut self, cursor: &mut dyn Cursor) -> Result<(), CursorError> {
        for filter in self.filters.iter_mut() {
            filter.init(cursor)?;
        }
        Ok(())
    }

    fn tentative_accept(&mut self, row: &Row) -> bool {
        self.filters
            .iter_mut()
            .fold(true, |accepted, filter| filter.tentative_accept(row) && accepted)
    }

    fn accept_more(&self) -> bool {
        self.filters.iter().all(|filter| filter.accept_more())
    }

    fn commit(&mut self, accepted_by_all: bool) {
        for filter in self.filters.iter_mut() {
            filter.commit(accepted_by_all);
        }
    }

    fn clear(&mut self) {
        for filter in self.filters.iter_mut() {
            filter.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AcceptAll, PageFilter, PredicateFilter};
    use crate::row;

    fn even_id(row: &Row) -> bool {
        row.column_value_at(0)
            .and_then(|value| value.int_value())
            .is_some_and(|id| id % 2 == 0)
    }

    #[test]
    fn empty_chain_accepts_everything() {
        let mut chain = FilterChain::new();

        assert!(chain.is_empty());
        assert!(chain.tentative_accept(&row![1]));
        assert!(chain.accept_more());
    }

    #[test]
    fn accept_only_when_every_filter_accepts() {
        let mut chain = FilterChain::new()
            .with(AcceptAll)
            .with(PredicateFilter::new(even_id));

        assert_eq!(2, chain.len());
        assert!(chain.tentative_accept(&row![2]));
        chain.commit(true);
        assert!(!chain.tentative_accept(&row![3]));
        chain.commit(false);
    }

    #[test]
    fn every_filter_votes_even_after_a_rejection() {
        let mut chain = FilterChain::new()
            .with(PredicateFilter::new(even_id))
            .with(PageFilter::new(0, 2));

        assert!(!chain.tentative_accept(&row![1]));
        chain.commit(false);
        assert!(chain.tentative_accept(&row![2]));
        chain.commit(true);
        assert!(chain.accept_more());
        assert!(!chain.tentative_accept(&row![3]));
        chain.commit(false);
        assert!(chain.tentative_accept(&row![4]));
        chain.commit(true);

        assert!(!chain.accept_more());
    }

    #[test]
    fn clear_every_filter() {
        let mut chain = FilterChain::new().with(PageFilter::new(0, 1));
        chain.tentative_accept(&row![2]);
        chain.commit(true);
        assert!(!chain.accept_more());

        chain.clear();

        assert!(chain.accept_more());
    }
}
