//! Settings read from TOML.
//!
//! ```toml
//! [connection]
//! driver = "relscan.memory"
//! url = "relscan:mem:inventory"
//! username = "scott"
//! password = "tiger"
//!
//! [scan]
//! cursor = "scrollable"
//! page_size = 50
//! ```

use crate::connection::error::ConfigurationError;
use crate::cursor::CursorKind;
use crate::filter::PageFilter;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub connection: ConnectionSettings,
    #[serde(default)]
    pub scan: ScanSettings,
}

/// Inputs of a [`ConnectionFactory`](crate::connection::ConnectionFactory).
#[derive(Clone, Deserialize)]
pub struct ConnectionSettings {
    pub driver: String,
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("driver", &self.driver)
            .field("url", &self.url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub cursor: CursorKind,
    pub page_size: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            cursor: CursorKind::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ScanSettings {
    pub fn page_filter(&self, page_number: usize) -> PageFilter {
        PageFilter::new(page_number, self.page_size)
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Settings, ConfigurationError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigurationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
