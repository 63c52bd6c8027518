//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::HostError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_vars(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self, HostError> {
        let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST).to_owned();
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| HostError::Config { var: "PORT", reason: format!("{raw:?}: {e}") })?,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
