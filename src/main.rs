//! Diagnostic HTTP echo server.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                 ECHO SERVER                  │
//!                 │                                              │
//!   :4000 ───────▶│  listener ─▶ router ─▶ reflect ─┬─▶ JSON     │
//!   :5000 ───────▶│  listener ─▶ router ─▶ reflect ─┤            │
//!   :6001 ───────▶│  listener ─▶ router ─▶ reflect ─┘            │
//!                 │                            │                 │
//!                 │                            ▼                 │
//!                 │                   console sink (stdout)      │
//!                 └──────────────────────────────────────────────┘
//! ```
//!
//! Each port runs independently; a fatal error on any of them exits the
//! process.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use echo_server::config::{self, EchoConfig};
use echo_server::http::AppState;
use echo_server::lifecycle;
use echo_server::observability::{logging, StdoutSink};

#[derive(Parser, Debug)]
#[command(name = "echo-server")]
#[command(about = "Echo every HTTP request back as JSON", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on; repeat for several. Replaces the configured ports.
    #[arg(short, long = "port")]
    ports: Vec<u16>,

    /// Host address every listener binds to.
    #[arg(short, long)]
    bind: Option<String>,

    /// Print request lines without ANSI colors.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn load(&self) -> Result<EchoConfig, config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => EchoConfig::default(),
        };

        if !self.ports.is_empty() {
            config.listener.ports = self.ports.clone();
        }
        if let Some(bind) = &self.bind {
            config.listener.bind_host = bind.clone();
        }
        if self.no_color {
            config.observability.ansi = false;
        }

        config::validate_config(&config).map_err(config::ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("echo-server: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_host = %config.listener.bind_host,
        ports = ?config.listener.ports,
        ansi = config.observability.ansi,
        "Configuration loaded"
    );

    let state = AppState::new(Arc::new(StdoutSink), config.observability.ansi);

    match lifecycle::run(&config.listener, state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Echo server terminated");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo_server::config::DEFAULT_PORTS;

    #[test]
    fn no_arguments_uses_default_ports() {
        let cli = Cli::try_parse_from(["echo-server"]).unwrap();
        let config = cli.load().unwrap();
        assert_eq!(config.listener.ports, DEFAULT_PORTS.to_vec());
        assert!(config.observability.ansi);
    }

    #[test]
    fn repeated_port_flags_replace_defaults() {
        let cli = Cli::try_parse_from([
            "echo-server", "--port", "8080", "-p", "8081", "--bind", "127.0.0.1", "--no-color",
        ])
        .unwrap();
        let config = cli.load().unwrap();
        assert_eq!(config.listener.ports, vec![8080, 8081]);
        assert_eq!(config.listener.bind_host, "127.0.0.1");
        assert!(!config.observability.ansi);
    }

    #[test]
    fn overrides_are_validated() {
        let cli = Cli::try_parse_from(["echo-server", "-p", "9000", "-p", "9000"]).unwrap();
        assert!(matches!(
            cli.load(),
            Err(config::ConfigError::Validation(_))
        ));
    }
}
