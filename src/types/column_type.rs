use crate::types::column_value::ColumnValue;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ColumnType {
    Int,
    Text,
}

impl ColumnType {
    pub(crate) fn accepts(&self, value: &ColumnValue) -> bool {
        matches!(
            (self, value),
            (ColumnType::Int, ColumnValue::Int(_)) | (ColumnType::Text, ColumnValue::Text(_))
        )
    }
}
