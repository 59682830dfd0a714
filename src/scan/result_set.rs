use crate::schema::Schema;
use crate::storage::row::Row;
use crate::types::column_value::ColumnValue;

/// Rows materialized by a filtered scan, with the schema used to read them.
#[derive(Debug)]
pub struct ResultSet {
    schema: Schema,
    rows: Vec<Row>,
    rows_visited: usize,
}

impl ResultSet {
    pub(crate) fn new(schema: Schema, rows: Vec<Row>, rows_visited: usize) -> Self {
        Self {
            schema,
            rows,
            rows_visited,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows the filter was asked about, accepted or not.
    pub fn rows_visited(&self) -> usize {
        self.rows_visited
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn column<'a>(&self, row: &'a Row, column_name: &str) -> Option<&'a ColumnValue> {
        let column_position = self.schema.column_position(column_name)?;
        row.column_value_at(column_position)
    }
}
