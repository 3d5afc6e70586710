use anyhow::Context;
use clap::Parser;

use prodcat_cli::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()
        .context("invalid environment configuration")?
        .with_overrides(&cli.global);

    prodcat_observability::init_with(config.log_format);
    tracing::debug!(?config, "configuration resolved");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    prodcat_cli::run(cli, &config, stdin.lock(), &mut stdout)
}
