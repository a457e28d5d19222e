//! Server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BLUENEXUS_HOST '{0}': expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BLUENEXUS_HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("BLUENEXUS_HOST").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { host: parse_host(host)?, port: parse_port(port)? })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let raw = raw.map_or(DEFAULT_HOST, str::trim);
    raw.parse().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
