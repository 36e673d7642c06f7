use anyhow::Result;
use clap::Parser;
use scaffold_cli::{Cli, Config, ScaffoldCli};
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity);

    let config = Config::discover(cli.config.as_deref())?;
    ScaffoldCli::with_config(config).run(cli)
}

fn setup_logging(verbosity: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
