//! Configuration validation.
//!
//! Serde handles syntax; this module checks values.
//! Returns all validation errors, not just the first.

use std::collections::HashSet;
use std::net::IpAddr;

use crate::config::schema::EchoConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.ports must not be empty")]
    NoPorts,
    #[error("listener.ports contains port 0")]
    ZeroPort,
    #[error("listener.ports lists port {0} more than once")]
    DuplicatePort(u16),
    #[error("listener.bind_host {0:?} is not an IP address")]
    InvalidBindHost(String),
    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &EchoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.ports.is_empty() {
        errors.push(ValidationError::NoPorts);
    }
    if config.listener.ports.contains(&0) {
        errors.push(ValidationError::ZeroPort);
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for &port in &config.listener.ports {
        if !seen.insert(port) && reported.insert(port) {
            errors.push(ValidationError::DuplicatePort(port));
        }
    }

    if config.listener.bind_host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidBindHost(
            config.listener.bind_host.clone(),
        ));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&EchoConfig::default()), Ok(()));
    }

    #[test]
    fn duplicate_port_reported_once() {
        let mut config = EchoConfig::default();
        config.listener.ports = vec![4000, 4000, 4000, 5000];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::DuplicatePort(4000)]);
    }

    #[test]
    fn zero_port_rejected() {
        let mut config = EchoConfig::default();
        config.listener.ports = vec![0, 4000];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroPort]);
    }

    #[test]
    fn bind_host_must_be_an_ip() {
        let mut config = EchoConfig::default();
        config.listener.bind_host = "localhost".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindHost("localhost".to_string())]
        );
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = EchoConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert_eq!(validate_config(&config), Ok(()));
    }
}
