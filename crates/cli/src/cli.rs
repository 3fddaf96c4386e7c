//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "DAILYPS_CONFIG";

/// Daily problem picker for a study group
#[derive(Parser, Debug)]
#[command(name = "dailyps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path (default: $DAILYPS_CONFIG, then config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON log lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Config path from the flag, the environment, or the default.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Sync every solver, select today's problems and publish them
    Run,

    /// Sync solved histories into the local store
    Sync {
        /// Only sync this handle
        #[arg(long)]
        handle: Option<String>,
    },

    /// Select and print problems without publishing (dry run)
    Select,
}
