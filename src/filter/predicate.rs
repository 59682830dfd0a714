use crate::cursor::error::CursorError;
use crate::cursor::Cursor;
use crate::filter::error::FilterError;
use crate::filter::RowFilter;
use crate::schema::Schema;
use crate::storage::row::Row;
use regex::Regex;

/// A condition over a single row.
///
/// Implemented for every `Fn(&Row) -> bool`, so closures can be used directly.
pub trait RowPredicate: Send + Sync {
    fn matches(&self, row: &Row) -> bool;
}

impl<F> RowPredicate for F
where
    F: Fn(&Row) -> bool + Send + Sync,
{
    fn matches(&self, row: &Row) -> bool {
        self(row)
    }
}

/// Matches rows whose text column matches a regular expression.
///
/// Integer columns and missing columns never match.
#[derive(Debug, Clone)]
pub struct ColumnPattern {
    column_position: usize,
    regex: Regex,
}

impl ColumnPattern {
    pub fn new(column_position: usize, regex: Regex) -> Self {
        Self {
            column_position,
            regex,
        }
    }

    /// Resolves `column_name` against `schema` and compiles `pattern`.
    pub fn for_column(
        schema: &Schema,
        column_name: &str,
        pattern: &str,
    ) -> Result<Self, FilterError> {
        let column_position = schema
            .column_position(column_name)
            .ok_or_else(|| FilterError::UnknownColumn(column_name.to_string()))?;
        Ok(Self::new(column_position, Regex::new(pattern)?))
    }
}

impl RowPredicate for ColumnPattern {
    fn matches(&self, row: &Row) -> bool {
        row.column_value_at(self.column_position)
            .and_then(|value| value.text_value())
            .is_some_and(|text| self.regex.is_match(text))
    }
}

/// Accepts the rows that satisfy a [`RowPredicate`].
///
/// It never positions the cursor and never stops a traversal early.
pub struct PredicateFilter<P: RowPredicate> {
    predicate: P,
}

impl<P: RowPredicate> PredicateFilter<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P: RowPredicate> RowFilter for PredicateFilter<P> {
    fn init(&mut self, _cursor: &mut dyn Cursor) -> Result<(), CursorError> {
        Ok(())
    }

    fn tentative_accept(&mut self, row: &Row) -> bool {
        self.predicate.matches(row)
    }

    fn accept_more(&self) -> bool {
        true
    }

    fn commit(&mut self, _accepted_by_all: bool) {}

    fn clear(&mut self) {}
}
