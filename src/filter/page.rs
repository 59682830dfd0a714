use crate::cursor::error::CursorError;
use crate::cursor::Cursor;
use crate::filter::RowFilter;
use crate::storage::row::Row;
use tracing::{debug, trace};

/// Accepts exactly one page of rows.
///
/// Page `n` of size `s` covers the zero-based rows `[n * s, n * s + s)`.
/// [`init`](RowFilter::init) moves the cursor onto the first row of the page,
/// after which the filter accepts the next `s` rows it is asked about.
///
/// The filter counts every row it votes on, accepted or not, so
/// [`accept_more`](RowFilter::accept_more) turns false as soon as a full page
/// has been evaluated. A row it accepted that a sibling filter rejected is
/// handed back at [`commit`](RowFilter::commit), freeing a slot for a later row.
#[derive(Debug, Clone)]
pub struct PageFilter {
    page_number: usize,
    page_size: usize,
    rows_evaluated: usize,
    pending_vote: Option<bool>,
}

impl PageFilter {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
            rows_evaluated: 0,
            pending_vote: None,
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rows voted on since the last reset, minus rows handed back at commit.
    pub fn rows_evaluated(&self) -> usize {
        self.rows_evaluated
    }

    /// Number of rows that precede the page.
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }

    fn position_sequentially(
        &self,
        cursor: &mut dyn Cursor,
        start_row: usize,
    ) -> Result<(), CursorError> {
        let offset = self.offset();
        for step in 1..=start_row {
            if !cursor.advance()? {
                if step <= offset {
                    return Err(CursorError::ExhaustedBeforeOffset { offset });
                }
                debug!(offset, "page starts after the last row");
            }
        }
        Ok(())
    }

    fn position_directly(
        &self,
        cursor: &mut dyn Cursor,
        start_row: usize,
    ) -> Result<(), CursorError> {
        if cursor.absolute(start_row)? {
            return Ok(());
        }

        let offset = self.offset();
        if offset == 0 {
            return Ok(());
        }
        if !cursor.absolute(offset)? {
            return Err(CursorError::ExhaustedBeforeOffset { offset });
        }
        // The last row of the previous page exists; leave the cursor after it.
        cursor.advance()?;
        debug!(offset, "page starts after the last row");
        Ok(())
    }
}

impl RowFilter for PageFilter {
    fn init(&mut self, cursor: &mut dyn Cursor) -> Result<(), CursorError> {
        let start_row = self.offset().saturating_add(1);
        let random_access = cursor.supports_random_access();
        debug!(
            page_number = self.page_number,
            page_size = self.page_size,
            start_row,
            random_access,
            "positioning cursor at page start"
        );

        if random_access {
            self.position_directly(cursor, start_row)
        } else {
            self.position_sequentially(cursor, start_row)
        }
    }

    fn tentative_accept(&mut self, _row: &Row) -> bool {
        let accepted = self.rows_evaluated < self.page_size;
        self.rows_evaluated += 1;
        self.pending_vote = Some(accepted);
        trace!(rows_evaluated = self.rows_evaluated, accepted, "page vote");
        accepted
    }

    fn accept_more(&self) -> bool {
        self.rows_evaluated < self.page_size
    }

    fn commit(&mut self, accepted_by_all: bool) {
        if self.pending_vote.take() == Some(true) && !accepted_by_all {
            self.rows_evaluated -= 1;
        }
    }

    fn clear(&mut self) {
        self.rows_evaluated = 0;
        self.pending_vote = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::MemoryCursor;
    use crate::test_utils::{id_rows, id_schema, RecordingCursor};
    use crate::row;

    #[test]
    fn accept_the_first_page_size_rows() {
        let mut filter = PageFilter::new(0, 10);

        for id in 0..10 {
            assert!(filter.accept_more());
            assert!(filter.tentative_accept(&row![id]));
            filter.commit(true);
        }
        assert!(!filter.accept_more());
        assert!(!filter.tentative_accept(&row![10]));
        filter.commit(false);
        assert!(!filter.accept_more());
    }

    #[test]
    fn count_rejected_rows_as_evaluated() {
        let mut filter = PageFilter::new(0, 1);

        assert!(filter.tentative_accept(&row![1]));
        filter.commit(true);
        assert!(!filter.tentative_accept(&row![2]));
        filter.commit(false);

        assert_eq!(2, filter.rows_evaluated());
    }

    #[test]
    fn hand_back_a_slot_when_a_sibling_filter_rejects_the_row() {
        let mut filter = PageFilter::new(0, 2);

        assert!(filter.tentative_accept(&row![1]));
        filter.commit(false);
        assert_eq!(0, filter.rows_evaluated());

        assert!(filter.tentative_accept(&row![2]));
        filter.commit(true);
        assert!(filter.tentative_accept(&row![3]));
        filter.commit(true);
        assert!(!filter.accept_more());
    }

    #[test]
    fn one_more_row_is_accepted_after_a_correction() {
        let mut filter = PageFilter::new(0, 3);
        let mut accepted = 0;

        for id in 0..10 {
            let vote = filter.tentative_accept(&row![id]);
            let overridden = id == 1;
            filter.commit(vote && !overridden);
            if vote {
                accepted += 1;
            }
        }

        assert_eq!(4, accepted);
    }

    #[test]
    fn zero_sized_page_accepts_nothing() {
        let mut filter = PageFilter::new(3, 0);

        assert!(!filter.accept_more());
        assert!(!filter.tentative_accept(&row![1]));
    }

    #[test]
    fn clear_resets_the_page_quota() {
        let mut filter = PageFilter::new(0, 1);
        filter.tentative_accept(&row![1]);
        filter.commit(true);
        assert!(!filter.accept_more());

        filter.clear();

        assert_eq!(0, filter.rows_evaluated());
        assert!(filter.accept_more());
        assert!(filter.tentative_accept(&row![1]));
    }

    #[test]
    fn offset_of_a_page() {
        assert_eq!(10, PageFilter::new(2, 5).offset());
        assert_eq!(0, PageFilter::new(0, 5).offset());
        assert_eq!(usize::MAX, PageFilter::new(usize::MAX, 2).offset());
    }

    #[test]
    fn init_positions_a_scrollable_cursor_directly() {
        let mut filter = PageFilter::new(2, 5);
        let mut cursor = RecordingCursor::scrollable(id_rows(1..=20));

        filter.init(&mut cursor).unwrap();

        assert_eq!(11, cursor.position());
        assert_eq!(&row![11], cursor.current().unwrap());
        assert_eq!(vec![11], cursor.absolute_calls());
        assert_eq!(0, cursor.advance_calls());
    }

    #[test]
    fn init_steps_a_forward_only_cursor_to_the_page_start() {
        let mut filter = PageFilter::new(2, 5);
        let mut cursor = RecordingCursor::forward_only(id_rows(1..=20));

        filter.init(&mut cursor).unwrap();

        assert_eq!(11, cursor.advance_calls());
        assert!(cursor.absolute_calls().is_empty());
        assert_eq!(&row![11], cursor.current().unwrap());
    }

    #[test]
    fn init_steps_once_for_the_first_page() {
        let mut filter = PageFilter::new(0, 10);
        let mut cursor = RecordingCursor::forward_only(id_rows(1..=3));

        filter.init(&mut cursor).unwrap();

        assert_eq!(1, cursor.advance_calls());
        assert_eq!(&row![1], cursor.current().unwrap());
    }

    #[test]
    fn init_fails_when_a_forward_only_cursor_is_exhausted_before_the_offset() {
        let mut filter = PageFilter::new(3, 5);
        let mut cursor = MemoryCursor::forward_only(id_rows(1..=12), id_schema());

        let result = filter.init(&mut cursor);

        assert_eq!(
            Err(CursorError::ExhaustedBeforeOffset { offset: 15 }),
            result
        );
    }

    #[test]
    fn init_fails_when_a_scrollable_cursor_has_fewer_rows_than_the_offset() {
        let mut filter = PageFilter::new(3, 5);
        let mut cursor = MemoryCursor::scrollable(id_rows(1..=12), id_schema());

        let result = filter.init(&mut cursor);

        assert_eq!(
            Err(CursorError::ExhaustedBeforeOffset { offset: 15 }),
            result
        );
    }

    #[test]
    fn page_right_after_the_last_row_is_empty_for_a_forward_only_cursor() {
        let mut filter = PageFilter::new(1, 10);
        let mut cursor = MemoryCursor::forward_only(id_rows(1..=10), id_schema());

        filter.init(&mut cursor).unwrap();

        assert!(!cursor.is_on_row());
        assert_eq!(11, cursor.position());
    }

    #[test]
    fn page_right_after_the_last_row_is_empty_for_a_scrollable_cursor() {
        let mut filter = PageFilter::new(1, 10);
        let mut cursor = MemoryCursor::scrollable(id_rows(1..=10), id_schema());

        filter.init(&mut cursor).unwrap();

        assert!(!cursor.is_on_row());
        assert_eq!(11, cursor.position());
    }

    #[test]
    fn first_page_of_an_empty_result_is_empty() {
        let mut forward_only = MemoryCursor::forward_only(Vec::new(), id_schema());
        let mut scrollable = MemoryCursor::scrollable(Vec::new(), id_schema());

        PageFilter::new(0, 10).init(&mut forward_only).unwrap();
        PageFilter::new(0, 10).init(&mut scrollable).unwrap();

        assert!(!forward_only.is_on_row());
        assert!(!scrollable.is_on_row());
    }
}
