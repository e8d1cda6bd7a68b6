//! # CLI Module
//!
//! Command-line interface for the `openapi-authz` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Resolve the spec and write the generated policy module:
//!
//! ```bash
//! openapi-authz generate --spec openapi.yaml --output src/httproutes.rs
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Path to the OpenAPI specification (required)
//! - `--output <FILE>` - Generated Rust file (required)
//! - `--namespace <IDENT>` - Generated module name (default: `httproutes`)
//! - `--config <FILE>` - Resolver config (default: `openapi-authz.toml` next to the spec)
//! - `--scheme <NAME>` - Bearer scheme name (default: `BearerAuth`)
//! - `--role-prefix <PREFIX>` - Role token prefix (default: `role:`)
//! - `--fmt` - Run the output through `rustfmt`
//! - `--check` - Compare with the existing file instead of writing it
//!
//! ### `inspect`
//!
//! Print the resolved policies, sorted by route:
//!
//! ```bash
//! openapi-authz inspect --spec openapi.yaml
//! openapi-authz inspect --spec openapi.yaml --json
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use openapi_authz::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(&cli, &mut std::io::stdout())?;
//! ```

mod commands;


pub use commands::{run, Cli, Commands, ResolverArgs};
