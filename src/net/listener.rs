//! TCP listener binding.
//!
//! No connection limit is enforced: every accepted connection is handed
//! straight to the HTTP layer.

use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// The bind host is not a usable address.
    #[error("Invalid bind address {host}:{port}: {source}")]
    Address {
        host: String,
        port: u16,
        #[source]
        source: std::net::AddrParseError,
    },
    /// Failed to bind to address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve `host` and `port` into a socket address.
pub fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, ListenerError> {
    let ip: IpAddr = host.parse().map_err(|source| ListenerError::Address {
        host: host.to_string(),
        port,
        source,
    })?;
    Ok(SocketAddr::new(ip, port))
}

/// Bind a TCP listener on `host:port`.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener, ListenerError> {
    let addr = socket_addr(host, port)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })?;

    tracing::debug!(address = %addr, "Listener bound");
    Ok(listener)
}
