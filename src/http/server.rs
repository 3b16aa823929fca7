//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router mapping every path and method to the reflector
//! - Wire up request tracing
//! - Serve a single bound listener

use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::reflect::reflect;
use crate::observability::LogSink;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared console sink for request lines.
    pub sink: Arc<dyn LogSink>,
    /// Color the console line.
    pub ansi: bool,
}

impl AppState {
    pub fn new(sink: Arc<dyn LogSink>, ansi: bool) -> Self {
        Self { sink, ansi }
    }
}

/// HTTP server for one listener.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(reflect))
            .route("/{*path}", any(reflect))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Only returns when serving fails.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router).await?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::observability::MemorySink;

    #[tokio::test]
    async fn routes_any_path_and_method() {
        let sink = Arc::new(MemorySink::new());
        let router = HttpServer::new(AppState::new(sink.clone(), false)).router();

        for (method, uri) in [
            ("GET", "/"),
            ("POST", "/a"),
            ("PATCH", "/a/b/c?d=e"),
            ("OPTIONS", "/deeply/nested/path/"),
            ("PURGE", "/cache"),
        ] {
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap();
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{method} {uri}");
        }

        assert_eq!(sink.lines().len(), 5);
    }
}
