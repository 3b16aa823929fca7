//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! configured (host, port)
//!     → listener.rs (resolve address, bind TCP listener)
//!     → hand off to the HTTP layer
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
