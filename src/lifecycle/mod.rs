//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → one task per port → bind → announce → serve
//!
//! Per listener:
//!     Starting → Serving → (Fatal → process exits)
//! ```
//!
//! There is no graceful shutdown: a fatal error on any listener ends the
//! whole process.

pub mod startup;

pub use startup::{run, ListenerPhase, StartupError};
