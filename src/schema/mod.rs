pub(crate) mod column;
pub mod error;

use crate::schema::column::Column;
use crate::schema::error::SchemaError;
use crate::types::column_type::ColumnType;
use crate::types::column_value::ColumnValue;

/// Ordered, named columns of a table.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn add_column(mut self, name: &str, column_type: ColumnType) -> Result<Self, SchemaError> {
        self.ensure_column_not_already_defined(name)?;

        self.columns.push(Column::new(name, column_type));
        Ok(self)
    }

    /// Returns the zero-based position of the column, matching names case-insensitively.
    pub fn column_position(&self, column_name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.matches_name(column_name))
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name()).collect()
    }

    pub(crate) fn check_type_compatibility(
        &self,
        values: &[ColumnValue],
    ) -> Result<(), SchemaError> {
        if values.len() != self.column_count() {
            return Err(SchemaError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        for (column, value) in self.columns.iter().zip(values) {
            if !column.column_type().accepts(value) {
                return Err(SchemaError::ColumnTypeMismatch {
                    column: column.name().to_string(),
                    expected: column.column_type(),
                    actual: value.column_type(),
                });
            }
        }
        Ok(())
    }

    fn ensure_column_not_already_defined(&self, name: &str) -> Result<(), SchemaError> {
        if self.column_position(name).is_some() {
            return Err(SchemaError::DuplicateColumnName(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_column_to_schema() {
        let schema = Schema::new().add_column("id", ColumnType::Int).unwrap();

        assert_eq!(1, schema.column_count());
    }

    #[test]
    fn add_column_with_the_same_name_to_schema() {
        let result = Schema::new()
            .add_column("id", ColumnType::Int)
            .unwrap()
            .add_column("ID", ColumnType::Text);

        assert!(matches!(
            result,
            Err(SchemaError::DuplicateColumnName(ref column_name)) if column_name == "ID"
        ));
    }

    #[test]
    fn column_position() {
        let schema = Schema::new()
            .add_column("id", ColumnType::Int)
            .unwrap()
            .add_column("name", ColumnType::Text)
            .unwrap();

        assert_eq!(Some(1), schema.column_position("name"));
    }

    #[test]
    fn attempt_to_get_column_position_of_a_column_that_does_not_exist_in_schema() {
        let schema = Schema::new().add_column("id", ColumnType::Int).unwrap();

        assert!(schema.column_position("age").is_none());
    }

    #[test]
    fn column_count_mismatch() {
        let schema = Schema::new()
            .add_column("id", ColumnType::Int)
            .unwrap()
            .add_column("grade", ColumnType::Int)
            .unwrap();

        let result = schema.check_type_compatibility(&[ColumnValue::text("relscan")]);

        assert_eq!(
            Err(SchemaError::ColumnCountMismatch {
                expected: 2,
                actual: 1
            }),
            result
        );
    }

    #[test]
    fn column_type_mismatch() {
        let schema = Schema::new().add_column("id", ColumnType::Int).unwrap();

        let result = schema.check_type_compatibility(&[ColumnValue::text("relscan")]);

        assert_eq!(
            Err(SchemaError::ColumnTypeMismatch {
                column: "id".to_string(),
                expected: ColumnType::Int,
                actual: ColumnType::Text,
            }),
            result
        );
    }

    #[test]
    fn type_compatible() {
        let schema = Schema::new().add_column("id", ColumnType::Int).unwrap();

        assert!(schema.check_type_compatibility(&[ColumnValue::Int(100)]).is_ok());
    }

    #[test]
    fn column_names() {
        let schema = Schema::new()
            .add_column("id", ColumnType::Int)
            .unwrap()
            .add_column("name", ColumnType::Text)
            .unwrap();

        assert_eq!(vec!["id", "name"], schema.column_names());
    }
}
