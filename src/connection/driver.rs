use crate::connection::credentials::Credentials;
use crate::connection::error::{ConfigurationError, ConnectionError};
use crate::connection::memory::MemoryDriver;
use crate::connection::url::ConnectionUrl;
use crate::connection::Connection;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Opens connections to one kind of database.
pub trait Driver: Send + Sync {
    /// The identifier the driver is registered under.
    fn name(&self) -> &str;

    fn accepts_url(&self, url: &ConnectionUrl) -> bool;

    fn connect(
        &self,
        url: &ConnectionUrl,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

/// Resolves driver identifiers to drivers.
pub struct DriverRegistry {
    drivers: RwLock<HashMap<String, Arc<dyn Driver>>>,
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self {
            drivers: RwLock::new(HashMap::new()),
        }
    }

    /// A registry holding a fresh [`MemoryDriver`].
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        let memory_driver: Arc<dyn Driver> = Arc::new(MemoryDriver::new());
        registry
            .drivers
            .write()
            .unwrap()
            .insert(memory_driver.name().to_string(), memory_driver);
        registry
    }

    pub fn register(&self, driver: Arc<dyn Driver>) -> Result<(), ConfigurationError> {
        let mut drivers = self.drivers.write().unwrap();

        let name = driver.name().to_string();
        if drivers.contains_key(&name) {
            return Err(ConfigurationError::DuplicateDriver(name));
        }
        drivers.insert(name, driver);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Driver>, ConfigurationError> {
        let drivers = self.drivers.read().unwrap();
        drivers
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::UnknownDriver(name.to_string()))
    }
}
