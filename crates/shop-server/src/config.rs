//! Server configuration.
//!
//! The listening address and data directory are fixed defaults; there is no
//! environment or command-line override. Tests build their own
//! [`ServerConfig`] pointing at a temporary directory.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_address: IpAddr,
    /// TCP port to bind.
    pub port: u16,
    /// Directory holding `productos.json` and `carrito.json`.
    pub data_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Returns a copy of this config using `data_dir` for collection files.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
