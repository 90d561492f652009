//! Lookup command - print the name stored for an id.

use std::path::Path;

use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::db::Db;
use crate::errors::Result;

#[derive(Args)]
pub struct LookupCmd {
    /// Primary key to look up
    #[arg(long, default_value_t = 1)]
    pub id: i64,
}

impl LookupCmd {
    pub async fn run(&self, config_path: &Path) -> Result<()> {
        let config = Config::load(config_path)?;

        let mut db = Db::connect(&config.mysql).await?;
        let result = db.query_name_by_id(self.id).await;
        let closed = db.close().await;

        let name = result?;
        closed?;
        info!(id = self.id, "found row");
        println!("{name}");
        Ok(())
    }
}
