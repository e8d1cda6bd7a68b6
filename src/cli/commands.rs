use crate::config::{resolve_file_config, FileConfig, ResolverConfig};
use crate::generator::{check_up_to_date, format_source, generate, validate_namespace, write_atomic};
use crate::spec::{load_config, AuthPolicy, Config};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for openapi-authz
#[derive(Debug, Parser)]
#[command(name = "openapi-authz")]
#[command(
    about = "Generate a route authorization policy table from OpenAPI security declarations",
    long_about = None
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Spec location and resolver settings shared by every command
#[derive(Debug, Clone, Args)]
pub struct ResolverArgs {
    /// Path to the OpenAPI specification file (YAML or JSON)
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Resolver config file (default: openapi-authz.toml next to the spec, if present)
    #[arg(long, env = "OPENAPI_AUTHZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Security scheme treated as the bearer scheme [default: BearerAuth]
    #[arg(long, env = "OPENAPI_AUTHZ_SCHEME")]
    pub scheme: Option<String>,

    /// Token prefix that marks a role rather than a scope [default: role:]
    #[arg(long, env = "OPENAPI_AUTHZ_ROLE_PREFIX")]
    pub role_prefix: Option<String>,
}

impl ResolverArgs {
    fn file_config(&self) -> anyhow::Result<FileConfig> {
        Ok(resolve_file_config(self.config.as_deref(), &self.spec)?)
    }

    fn resolver_config(&self, file: &FileConfig) -> ResolverConfig {
        file.resolver(self.scheme.as_deref(), self.role_prefix.as_deref())
    }
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the Rust policy module from an OpenAPI spec
    Generate {
        #[command(flatten)]
        resolver: ResolverArgs,

        /// Output file for the generated Rust source
        #[arg(short, long)]
        output: PathBuf,

        /// Name of the generated module [default: httproutes]
        #[arg(short, long, env = "OPENAPI_AUTHZ_NAMESPACE")]
        namespace: Option<String>,

        /// Run the generated source through rustfmt
        #[arg(long, default_value_t = false)]
        fmt: bool,

        /// Do not write; fail if the output file is missing or out of date
        #[arg(long, default_value_t = false)]
        check: bool,
    },
    /// Print the resolved policy of every operation
    Inspect {
        #[command(flatten)]
        resolver: ResolverArgs,

        /// Print JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Execute a parsed command; `out` receives `inspect` output.
///
/// # Errors
///
/// Returns an error if the spec cannot be read or resolved, the namespace is
/// invalid, or the output cannot be formatted, written or checked.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            resolver,
            output,
            namespace,
            fmt,
            check,
        } => {
            let file = resolver.file_config()?;
            let namespace = file.namespace(namespace.as_deref());
            validate_namespace(&namespace)?;

            let config = resolve(resolver, &file)?;
            let mut source = generate(&namespace, &config)?;
            if *fmt {
                source = format_source(&source)?;
            }

            if *check {
                check_up_to_date(output, &source)?;
                info!(output = %output.display(), "Generated policies are up to date");
            } else {
                write_atomic(output, &source)?;
                info!(
                    output = %output.display(),
                    namespace = %namespace,
                    operations = config.len(),
                    "Wrote policy module"
                );
            }
            Ok(())
        }
        Commands::Inspect { resolver, json } => {
            let file = resolver.file_config()?;
            let config = resolve(resolver, &file)?;
            if *json {
                print_json(&config, out)
            } else {
                print_table(&config, out)
            }
        }
    }
}

fn resolve(resolver: &ResolverArgs, file: &FileConfig) -> anyhow::Result<Config> {
    let spec: &Path = &resolver.spec;
    load_config(spec, &resolver.resolver_config(file))
        .with_context(|| format!("Failed to resolve policies from {}", spec.display()))
}

#[derive(Serialize)]
struct InspectRow<'a> {
    method: &'a str,
    path: &'a str,
    #[serde(flatten)]
    policy: &'a AuthPolicy,
}

fn print_json(config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let rows: Vec<InspectRow<'_>> = config
        .sorted()
        .into_iter()
        .map(|(key, policy)| InspectRow {
            method: key.method.as_str(),
            path: &key.path,
            policy,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

fn print_table(config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let join = |items: &[String]| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(",")
        }
    };
    let rows: Vec<[String; 5]> = config
        .sorted()
        .into_iter()
        .map(|(key, policy)| {
            [
                key.method.to_string(),
                key.path.clone(),
                if policy.require_auth { "yes" } else { "no" }.to_string(),
                join(&policy.roles),
                join(&policy.scopes),
            ]
        })
        .collect();

    let header = ["METHOD", "PATH", "AUTH", "ROLES", "SCOPES"].map(str::to_string);
    let mut widths = header.clone().map(|h| h.len());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    for row in std::iter::once(&header).chain(&rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        writeln!(out, "{}", line.join("  ").trim_end())?;
    }
    Ok(())
}
