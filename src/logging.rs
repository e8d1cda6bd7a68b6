//! Structured logging setup.
//!
//! Logs go to stderr so that `inspect` output on stdout stays clean.
//!
//! | Variable                   | Values                                | Default  |
//! |----------------------------|---------------------------------------|----------|
//! | `OPENAPI_AUTHZ_LOG_LEVEL`  | `trace`/`debug`/`info`/`warn`/`error` | `warn`   |
//! | `OPENAPI_AUTHZ_LOG_FORMAT` | `pretty`/`json`                       | `pretty` |
//!
//! `RUST_LOG`, when set, takes precedence over the level. `--verbose` takes
//! precedence over both and logs at `debug`.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: pretty for terminals, JSON for CI log collectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Ignore `RUST_LOG` and use `log_level` as the whole filter
    pub ignore_rust_log: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("OPENAPI_AUTHZ_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            format: LogFormat::parse(
                &env::var("OPENAPI_AUTHZ_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
            ignore_rust_log: false,
        }
    }

    /// Force `debug` regardless of `RUST_LOG` (the CLI's `--verbose`).
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.log_level = "debug".to_string();
        self.ignore_rust_log = true;
        self
    }

    #[must_use]
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }

    /// Filter for the subscriber: `RUST_LOG` if set and not ignored, else
    /// the configured level.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let level = || EnvFilter::new(self.level().as_str());
        if self.ignore_rust_log {
            level()
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| level())
        }
    }
}

/// Install the global subscriber. Call once, from `main`.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env_filter = config.env_filter();

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")
}
