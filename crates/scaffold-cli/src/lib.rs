mod config;
mod dbcontext;

pub use config::*;
pub use dbcontext::{DbContextCommand, DbContextPlan};

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line front end of the scaffolder
#[derive(Debug, Default)]
pub struct ScaffoldCli {
    config: Config,
}

impl ScaffoldCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::parse_from(args);
        self.run(cli)
    }

    pub fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Command::Dbcontext(cmd) => cmd.run(&self.config),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(about = "Reverse engineer a database schema into entity types and a context")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./scaffold.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, global = true, default_value = "warn")]
    pub verbosity: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a context and entity types for a database
    Dbcontext(DbContextCommand),
}
