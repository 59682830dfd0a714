//! Row filtering between a result cursor and the code that consumes its rows.
//!
//! A [`Cursor`](cursor::Cursor) is opened through a
//! [`Connection`](connection::Connection), a [`RowFilter`](filter::RowFilter)
//! decides which rows to keep and where the traversal starts and stops, and a
//! [`FilteredScan`](scan::FilteredScan) ties the two together.
//!
//! ```
//! use relscan::connection::{ConnectionFactory, DriverRegistry, MemoryDriver, MEMORY_DRIVER_NAME};
//! use relscan::cursor::CursorKind;
//! use relscan::types::column_type::ColumnType;
//! use relscan::{rows, scan, schema};
//! use std::sync::Arc;
//!
//! let driver = Arc::new(MemoryDriver::new());
//! let database = driver.create_database("inventory");
//! database
//!     .catalog()
//!     .create_table("items", schema!["id" => ColumnType::Int].unwrap())
//!     .unwrap();
//! database
//!     .catalog()
//!     .insert_all_into("items", rows![[1], [2], [3], [4], [5]])
//!     .unwrap();
//!
//! let registry = DriverRegistry::new();
//! registry.register(driver).unwrap();
//!
//! let factory =
//!     ConnectionFactory::new(&registry, MEMORY_DRIVER_NAME, "relscan:mem:inventory", "", "")
//!         .unwrap();
//! let connection = factory.connection().unwrap();
//!
//! let page = scan::fetch_page(connection.as_ref(), "items", CursorKind::ForwardOnly, 1, 2).unwrap();
//! assert_eq!(2, page.len());
//! ```

pub mod catalog;
pub mod config;
pub mod connection;
pub mod cursor;
pub mod filter;
pub mod macros;
pub mod scan;
pub mod schema;
pub mod storage;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod types;
