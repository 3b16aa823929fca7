//! Diagnostic HTTP echo server library.
//!
//! Answers any request on any path with a JSON description of what the
//! client sent and writes a colorized summary line to the console.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::EchoConfig;
pub use http::{AppState, HttpServer, ReflectedRequest};
