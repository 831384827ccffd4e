use anyhow::{anyhow, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HTTP_PORT: &str = "8083";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Where the HTTP server listens.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind, from `BIND_ADDRESS`.
    pub bind_address: IpAddr,
    /// TCP port, from `HTTP_PORT`.
    pub http_port: u16,
}

impl Config {
    /// Reads `BIND_ADDRESS` and `HTTP_PORT`, falling back to `0.0.0.0:8083`.
    pub fn from_env() -> Result<Self> {
        let bind_str =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_str = if bind_str.trim().is_empty() {
            DEFAULT_BIND_ADDRESS.to_string()
        } else {
            bind_str
        };
        let bind_address = bind_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid BIND_ADDRESS"))?;

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            bind_address,
            http_port,
        })
    }

    /// Address to hand to the TCP listener.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.http_port)
    }
}
