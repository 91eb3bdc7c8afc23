//! Configuration for the Repodex HTTP server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// CLI arguments for the Repodex server.
#[derive(Debug, Parser)]
#[command(name = "repodex")]
#[command(about = "Repodex - In-memory repository catalog HTTP API")]
#[command(version)]
pub struct CliArgs {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// HTTP server port.
    #[arg(short, long, default_value = "3333")]
    pub port: u16,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "repodex_adapter=debug").
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Configuration for the Repodex HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// HTTP server port.
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3333,
        }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
        }
    }
}
