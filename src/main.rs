use clap::Parser;
use openapi_authz::cli::{run, Cli};
use openapi_authz::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    init_logging(&log_config)?;

    run(&cli, &mut std::io::stdout().lock())
}
