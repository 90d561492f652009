//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{ConfigCmd, InitCmd, LookupCmd};
use crate::config::CONFIG_FILE;
use crate::errors::Result;

#[derive(Parser)]
#[command(name = "rowtrace")]
#[command(about = "Look up a row by id, reporting failures with layered context")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON config file (relative to the working directory)
    #[arg(long, short = 'c', global = true, env = "ROWTRACE_CONFIG", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the name stored for an id
    Lookup(LookupCmd),

    /// Create the user table and seed rows
    Init(InitCmd),

    /// Inspect configuration
    Config(ConfigCmd),
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Command::Lookup(cmd) => cmd.run(&self.config).await,
            Command::Init(cmd) => cmd.run(&self.config).await,
            Command::Config(cmd) => cmd.run(&self.config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lookup_defaults() {
        let cli = Cli::try_parse_from(["rowtrace", "lookup"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        match cli.command {
            Command::Lookup(cmd) => assert_eq!(cmd.id, 1),
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_init_seeds_and_config_flag() {
        let cli = Cli::try_parse_from([
            "rowtrace", "init", "--seed", "1=Alice", "--seed", "2=Bob", "-c", "/tmp/db.json",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/db.json"));
        match cli.command {
            Command::Init(cmd) => {
                assert_eq!(cmd.seeds, vec![(1, "Alice".to_string()), (2, "Bob".to_string())])
            }
            _ => panic!("expected init"),
        }
    }
}
