use crate::types::column_value::ColumnValue;

/// A single row of column values, positioned the same way as the table schema.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Row {
    values: Vec<ColumnValue>,
}

impl Row {
    pub fn empty() -> Row {
        Self { values: Vec::new() }
    }

    pub fn filled(values: Vec<ColumnValue>) -> Row {
        Self { values }
    }

    pub fn add(mut self, value: ColumnValue) -> Self {
        self.values.push(value);
        self
    }

    pub fn column_value_at(&self, index: usize) -> Option<&ColumnValue> {
        self.values.get(index)
    }

    pub fn column_values(&self) -> &[ColumnValue] {
        &self.values
    }

    pub fn column_value_count(&self) -> usize {
        self.values.len()
    }
}
