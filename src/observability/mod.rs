//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Diagnostics (startup, listener phases, request spans):
//!     → logging.rs (tracing subscriber, stderr)
//!
//! Echo console output (startup notices, colorized request lines):
//!     → console.rs (LogSink, stdout)
//! ```
//!
//! Keeping the two apart leaves stdout holding only what the original
//! echo tool printed.

pub mod console;
pub mod logging;

pub use console::{LogSink, MemorySink, StdoutSink};
