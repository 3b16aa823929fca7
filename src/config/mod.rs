//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → EchoConfig (validated, immutable)
//!     → command-line overrides applied in main.rs
//! ```
//!
//! Every field has a default, so running without a file reproduces the
//! fixed port set 4000, 5000 and 6001.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{EchoConfig, ListenerConfig, ObservabilityConfig, DEFAULT_PORTS};
pub use validation::{validate_config, ValidationError};
