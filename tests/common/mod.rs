//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use echo_server::http::{AppState, HttpServer};
use echo_server::net;
use echo_server::observability::MemorySink;

/// Start an echo server on an ephemeral localhost port.
#[allow(dead_code)]
pub async fn start_echo_server(sink: Arc<MemorySink>) -> SocketAddr {
    let listener = net::bind("127.0.0.1", 0).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(AppState::new(sink, false));
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Reserve a currently free localhost port.
#[allow(dead_code)]
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Poll `check` until it holds or `timeout` elapses.
#[allow(dead_code)]
pub async fn wait_until<F: Fn() -> bool>(timeout: Duration, check: F) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    check()
}

/// HTTP client that never reuses connections between tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
