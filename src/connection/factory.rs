use crate::config::ConnectionSettings;
use crate::connection::credentials::Credentials;
use crate::connection::driver::{Driver, DriverRegistry};
use crate::connection::error::{ConfigurationError, ConnectionError};
use crate::connection::url::ConnectionUrl;
use crate::connection::Connection;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Produces connections from a driver identifier, a url and credentials.
///
/// The driver and url are validated when the factory is built, so a
/// misconfigured factory fails before any connection is attempted. Every call
/// to [`connection`](Self::connection) opens a new connection; nothing is pooled.
pub struct ConnectionFactory {
    driver: Arc<dyn Driver>,
    url: ConnectionUrl,
    credentials: Credentials,
}

impl ConnectionFactory {
    pub fn new(
        registry: &DriverRegistry,
        driver: &str,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<ConnectionFactory, ConfigurationError> {
        let resolved = registry.resolve(driver)?;
        let url = ConnectionUrl::parse(url)?;
        if !resolved.accepts_url(&url) {
            return Err(ConfigurationError::UnsupportedUrl {
                driver: driver.to_string(),
                url: url.to_string(),
            });
        }

        debug!(driver, %url, "connection factory ready");
        Ok(ConnectionFactory {
            driver: resolved,
            url,
            credentials: Credentials::new(username, password),
        })
    }

    pub fn from_settings(
        registry: &DriverRegistry,
        settings: &ConnectionSettings,
    ) -> Result<ConnectionFactory, ConfigurationError> {
        Self::new(
            registry,
            &settings.driver,
            &settings.url,
            &settings.username,
            &settings.password,
        )
    }

    /// Opens a connection with the stored credentials.
    pub fn connection(&self) -> Result<Box<dyn Connection>, ConnectionError> {
        self.driver.connect(&self.url, &self.credentials)
    }

    /// Opens a connection with the given credentials instead of the stored ones.
    pub fn connection_with(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        self.driver
            .connect(&self.url, &Credentials::new(username, password))
    }

    pub fn url(&self) -> &ConnectionUrl {
        &self.url
    }

    pub fn driver_name(&self) -> &str {
        self.driver.name()
    }

    /// Accepted for compatibility; connections are opened without a timeout.
    pub fn set_login_timeout(&mut self, timeout: Duration) {
        debug!(?timeout, "login timeout is not supported, ignoring");
    }

    pub fn login_timeout(&self) -> Duration {
        Duration::ZERO
    }

    /// Accepted for compatibility; the factory logs through `tracing` only.
    pub fn set_log_writer(&mut self, _writer: Option<Box<dyn Write + Send>>) {
        debug!("log writer is not supported, ignoring");
    }

    pub fn log_writer(&self) -> Option<&(dyn Write + Send)> {
        None
    }
}
