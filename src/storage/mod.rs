pub mod row;
pub mod table_store;
