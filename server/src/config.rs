//! Host server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidHost { var: &'static str, value: String },

    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Static files served for paths no other route claims.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `FLOATCHAT_HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `FLOATCHAT_PUBLIC_DIR`: default `public/` next to this crate's manifest
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match get("FLOATCHAT_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { var: "FLOATCHAT_HOST", value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let public_dir = get("FLOATCHAT_PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from);

        Ok(Self { host, port, public_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}
