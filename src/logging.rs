// ABOUTME: Logging configuration and structured logging setup for the calculator host
// ABOUTME: Configures log level, output format and location fields for tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use anyhow::Result;
use nutriplan_core::constants::service_names;
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive CLI use
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::NUTRIPLAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |value| LogFormat::from_str_lossy(&value));
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Production always carries source locations
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::NUTRIPLAN.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Configuration for the command-line tool
    ///
    /// Quiet and compact unless `--verbose` or `LOG_FORMAT` say otherwise;
    /// the remaining fields come from [`Self::from_env`].
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let base = Self::from_env();
        let format = if env::var("LOG_FORMAT").is_ok() {
            base.format
        } else {
            LogFormat::Compact
        };

        Self {
            level: if verbose { "debug" } else { "warn" }.into(),
            format,
            service_name: service_names::NUTRIPLAN_CLI.into(),
            ..base
        }
    }

    /// Filter combining `RUST_LOG` (or the configured level) with crate directives
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |env_directive| EnvFilter::new(&env_directive),
        );

        ["nutriplan", "nutriplan_core", "nutriplan_intelligence"]
            .iter()
            .fold(base, |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| Level::INFO.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "NutriPlan calculator starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location
            }
        });

        info!("Configuration loaded: {config_summary}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_lossy("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_lossy("COMPACT"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_lossy("anything"), LogFormat::Pretty);
    }

    #[test]
    #[serial]
    fn test_cli_config_is_quiet_unless_verbose() {
        env::remove_var("LOG_FORMAT");
        assert_eq!(LoggingConfig::for_cli(false).level, "warn");
        assert_eq!(LoggingConfig::for_cli(true).level, "debug");
        assert_eq!(LoggingConfig::for_cli(true).format, LogFormat::Compact);
    }

    #[test]
    #[serial]
    fn test_cli_config_honours_environment() {
        env::set_var("LOG_FORMAT", "json");
        env::set_var("ENVIRONMENT", "production");
        let config = LoggingConfig::for_cli(false);
        env::remove_var("LOG_FORMAT");
        env::remove_var("ENVIRONMENT");

        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);
        assert_eq!(config.environment, "production");
        assert_eq!(config.service_name, service_names::NUTRIPLAN_CLI);
    }
}
