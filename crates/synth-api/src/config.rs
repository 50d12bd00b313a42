//! Server configuration read from the environment.

use std::env;

use anyhow::anyhow;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port.
pub const DEFAULT_PORT: u16 = 5000;
/// Default upper bound on `rows` per request.
pub const DEFAULT_MAX_ROWS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests asking for more rows are rejected. Set in code, not from the
    /// environment.
    pub max_rows: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT`, falling back to defaults when unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or_else(|| defaults.host.clone());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow!("Invalid PORT {raw:?}: {e}"))?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            ..defaults
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
