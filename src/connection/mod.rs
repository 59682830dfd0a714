//! Connections to databases and the factory that opens them.

pub mod credentials;
pub mod driver;
pub mod error;
pub mod factory;
pub mod memory;
pub mod url;

pub use credentials::Credentials;
pub use driver::{Driver, DriverRegistry};
pub use factory::ConnectionFactory;
pub use memory::{Database, MemoryDriver, MEMORY_DRIVER_NAME};
pub use url::ConnectionUrl;

use crate::connection::error::ConnectionError;
use crate::cursor::{Cursor, CursorKind};
use crate::schema::Schema;

/// An open connection that hands out cursors over tables.
pub trait Connection {
    fn open_cursor(
        &self,
        table_name: &str,
        kind: CursorKind,
    ) -> Result<Box<dyn Cursor>, ConnectionError>;

    fn schema(&self, table_name: &str) -> Result<Schema, ConnectionError>;
}
