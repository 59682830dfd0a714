/// Creates a `Row` from a list of values.
///
/// Each value is converted into a `ColumnValue` through its `From` implementation.
///
/// # Examples
///
/// ```
/// use relscan::row;
/// use relscan::storage::row::Row;
/// use relscan::types::column_value::ColumnValue;
///
/// let row = row![1, "text"];
/// let expected = Row::filled(vec![ColumnValue::int(1), ColumnValue::text("text")]);
/// assert_eq!(row, expected);
/// ```
#[macro_export]
macro_rules! row {
    ( $( $x:expr ),* ) => {
        {
            use $crate::storage::row::Row;
            use $crate::types::column_value::ColumnValue;
            Row::filled(vec![
                $( ColumnValue::from($x) ),*
            ])
        }
    };
}

/// Creates a `Vec<Row>` from a list of row definitions.
///
/// # Examples
///
/// ```
/// use relscan::rows;
///
/// let rows = rows![[1, "a"], [2, "b"]];
/// assert_eq!(2, rows.len());
/// ```
#[macro_export]
macro_rules! rows {
    ( $( [ $( $x:expr ),* ] ),* ) => {
        vec![
            $(
                $crate::row![ $( $x ),* ]
            ),*
        ]
    };
}

/// Creates a `Schema` from `name => type` pairs, returning `Result<Schema, SchemaError>`.
///
/// # Examples
///
/// ```
/// use relscan::schema;
/// use relscan::types::column_type::ColumnType;
///
/// let schema = schema!["id" => ColumnType::Int, "name" => ColumnType::Text].unwrap();
/// assert_eq!(2, schema.column_count());
/// ```
#[macro_export]
macro_rules! schema {
    ( $( $name:expr => $column_type:expr ),* $(,)? ) => {
        {
            let schema: Result<$crate::schema::Schema, $crate::schema::error::SchemaError> =
                Ok($crate::schema::Schema::new());
            $(
                let schema = schema.and_then(|schema| schema.add_column($name, $column_type));
            )*
            schema
        }
    };
}
