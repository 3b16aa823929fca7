//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, one router per listener)
//!     → reflect.rs (read body, build record, log, encode)
//!         → record.rs (method, canonical headers, URL, body)
//!         → color.rs (method color for the console line)
//!     → JSON response to client
//! ```

pub mod color;
pub mod record;
pub mod reflect;
pub mod server;

pub use color::MethodColor;
pub use record::{canonical_header_key, ReflectedRequest};
pub use reflect::reflect;
pub use server::{AppState, HttpServer};
