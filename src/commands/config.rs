//! Config command - inspect the database configuration.

use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::Config;
use crate::errors::Result;

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Show current configuration (password masked)
    Show(ShowCmd),
}

#[derive(Args)]
pub struct ShowCmd {
    /// Print the connection string with the real password
    #[arg(long)]
    pub show_password: bool,
}

impl ConfigCmd {
    pub async fn run(&self, config_path: &Path) -> Result<()> {
        match &self.command {
            ConfigSubCmd::Show(cmd) => {
                let config = Config::load(config_path)?;
                let db = &config.mysql;
                println!("Config: {}", config_path.display());
                println!();
                println!("driver:     {:?}", db.driver);
                println!("host:       {}", db.host);
                println!("port:       {}", db.port);
                println!("user:       {}", db.user);
                println!("password:   (set)");
                println!("database:   {}", db.database);
                let dsn = if cmd.show_password {
                    db.dsn()
                } else {
                    db.redacted_dsn()
                };
                println!("dsn:        {dsn}");
            }
        }
        Ok(())
    }
}
