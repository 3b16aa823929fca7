//! Multi-port startup.
//!
//! Every configured port gets its own task owning its own listener. The
//! first task to fail takes the others down with it.

use std::fmt;

use tokio::task::{JoinError, JoinSet};

use crate::config::ListenerConfig;
use crate::http::{AppState, HttpServer};
use crate::net::{self, ListenerError};

/// Phase of a single listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerPhase {
    Starting,
    Serving,
    Fatal,
}

impl fmt::Display for ListenerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListenerPhase::Starting => "starting",
            ListenerPhase::Serving => "serving",
            ListenerPhase::Fatal => "fatal",
        })
    }
}

/// Fatal listener error.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("Listener on port {port} failed: {source}")]
    Serve {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("Listener on port {port} stopped")]
    Stopped { port: u16 },
    #[error("Listener task failed: {0}")]
    Task(#[from] JoinError),
}

/// Notice written to the console once a port is accepting connections.
pub fn startup_notice(port: u16) -> String {
    format!("Echo server is running on port {port}")
}

/// Start one listener per configured port and wait on all of them.
///
/// Under normal operation this never returns. On the first fatal error the
/// remaining listeners are aborted and the error is returned.
pub async fn run(config: &ListenerConfig, state: AppState) -> Result<(), StartupError> {
    let mut listeners = JoinSet::new();

    for &port in &config.ports {
        let host = config.bind_host.clone();
        let state = state.clone();
        listeners.spawn(serve_port(host, port, state));
    }

    while let Some(result) = listeners.join_next().await {
        let outcome = result.map_err(StartupError::from).and_then(|inner| inner);
        if let Err(e) = outcome {
            tracing::error!(error = %e, "Fatal listener error, stopping all listeners");
            listeners.abort_all();
            return Err(e);
        }
    }

    Ok(())
}

async fn serve_port(host: String, port: u16, state: AppState) -> Result<(), StartupError> {
    tracing::debug!(port, phase = %ListenerPhase::Starting, "Listener phase");

    let listener = match net::bind(&host, port).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(port, phase = %ListenerPhase::Fatal, error = %e, "Listener phase");
            return Err(e.into());
        }
    };

    let sink = state.sink.clone();
    let server = HttpServer::new(state);

    sink.write_line(&startup_notice(port));
    tracing::info!(port, phase = %ListenerPhase::Serving, "Listener phase");

    let result = server.run(listener).await;
    tracing::error!(port, phase = %ListenerPhase::Fatal, "Listener phase");

    match result {
        Ok(()) => Err(StartupError::Stopped { port }),
        Err(source) => Err(StartupError::Serve { port, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::observability::MemorySink;

    #[test]
    fn notice_names_the_port() {
        assert_eq!(startup_notice(4000), "Echo server is running on port 4000");
    }

    #[tokio::test]
    async fn bind_failure_on_one_port_fails_the_whole_run() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let sink = Arc::new(MemorySink::new());
        let config = ListenerConfig {
            bind_host: "127.0.0.1".to_string(),
            ports: vec![port],
        };

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            run(&config, AppState::new(sink.clone(), false)),
        )
        .await
        .expect("run should fail fast");

        assert!(matches!(
            result,
            Err(StartupError::Listener(ListenerError::Bind { .. }))
        ));
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn invalid_host_is_fatal() {
        let sink = Arc::new(MemorySink::new());
        let config = ListenerConfig {
            bind_host: "not-an-ip".to_string(),
            ports: vec![4000],
        };

        let result = run(&config, AppState::new(sink, false)).await;
        assert!(matches!(
            result,
            Err(StartupError::Listener(ListenerError::Address { .. }))
        ));
    }
}
