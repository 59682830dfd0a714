use crate::connection::error::ConfigurationError;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<scheme>[a-z][a-z0-9]*):(?P<subprotocol>[a-z][a-z0-9]*):(?P<target>[A-Za-z0-9_.\-/]+)$")
        .unwrap()
});

/// A parsed `<scheme>:<subprotocol>:<target>` connection url, e.g. `relscan:mem:inventory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionUrl {
    scheme: String,
    subprotocol: String,
    target: String,
}

impl ConnectionUrl {
    pub fn parse(url: &str) -> Result<ConnectionUrl, ConfigurationError> {
        let captures = URL_PATTERN
            .captures(url.trim())
            .ok_or_else(|| ConfigurationError::InvalidUrl(url.to_string()))?;

        Ok(ConnectionUrl {
            scheme: captures["scheme"].to_string(),
            subprotocol: captures["subprotocol"].to_string(),
            target: captures["target"].to_string(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn subprotocol(&self) -> &str {
        &self.subprotocol
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.scheme, self.subprotocol, self.target)
    }
}
