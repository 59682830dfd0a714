use crate::catalog::Catalog;
use crate::connection::credentials::Credentials;
use crate::connection::driver::Driver;
use crate::connection::error::ConnectionError;
use crate::connection::url::ConnectionUrl;
use crate::connection::Connection;
use crate::cursor::{Cursor, CursorKind};
use crate::schema::Schema;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

pub const MEMORY_DRIVER_NAME: &str = "relscan.memory";

const SCHEME: &str = "relscan";
const SUBPROTOCOL: &str = "mem";

/// An in-memory database: a catalog plus the credentials it requires, if any.
pub struct Database {
    catalog: Catalog,
    credentials: Option<Credentials>,
}

impl Database {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn authenticate(&self, credentials: &Credentials) -> bool {
        match &self.credentials {
            Some(required) => required == credentials,
            None => true,
        }
    }
}

/// Driver for databases addressed as `relscan:mem:<name>`.
pub struct MemoryDriver {
    databases: RwLock<HashMap<String, Arc<Database>>>,
}

impl Default for MemoryDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self {
            databases: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an open database, or returns the existing one with that name.
    pub fn create_database(&self, name: &str) -> Arc<Database> {
        self.insert_database(name, None)
    }

    /// Creates a database that only accepts the given credentials, or returns
    /// the existing one with that name.
    pub fn create_secured_database(&self, name: &str, credentials: Credentials) -> Arc<Database> {
        self.insert_database(name, Some(credentials))
    }

    pub fn database(&self, name: &str) -> Option<Arc<Database>> {
        let guard = self.databases.read().unwrap();
        guard.get(name).cloned()
    }

    fn insert_database(&self, name: &str, credentials: Option<Credentials>) -> Arc<Database> {
        let mut databases = self.databases.write().unwrap();
        databases
            .entry(name.to_string())
            .or_insert_with(|| {
                Arc::new(Database {
                    catalog: Catalog::new(),
                    credentials,
                })
            })
            .clone()
    }
}

impl Driver for MemoryDriver {
    fn name(&self) -> &str {
        MEMORY_DRIVER_NAME
    }

    fn accepts_url(&self, url: &ConnectionUrl) -> bool {
        url.scheme() == SCHEME && url.subprotocol() == SUBPROTOCOL
    }

    fn connect(
        &self,
        url: &ConnectionUrl,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        let database = self
            .database(url.target())
            .ok_or_else(|| ConnectionError::DatabaseNotFound(url.target().to_string()))?;

        if !database.authenticate(credentials) {
            warn!(
                database = url.target(),
                username = credentials.username(),
                "authentication failed"
            );
            return Err(ConnectionError::AuthenticationFailed(
                credentials.username().to_string(),
            ));
        }

        debug!(
            database = url.target(),
            username = credentials.username(),
            "connected"
        );
        Ok(Box::new(MemoryConnection { database }))
    }
}

struct MemoryConnection {
    database: Arc<Database>,
}

impl Connection for MemoryConnection {
    fn open_cursor(
        &self,
        table_name: &str,
        kind: CursorKind,
    ) -> Result<Box<dyn Cursor>, ConnectionError> {
        let table_scan = self.database.catalog().scan(table_name)?;
        Ok(Box::new(table_scan.cursor(kind)))
    }

    fn schema(&self, table_name: &str) -> Result<Schema, ConnectionError> {
        let table_scan = self.database.catalog().scan(table_name)?;
        Ok(table_scan.schema().clone())
    }
}
