//! Init command - create the user table and optionally seed it.

use std::path::Path;

use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::db::Db;
use crate::errors::Result;

#[derive(Args)]
pub struct InitCmd {
    /// Rows to insert, as ID=NAME (repeatable)
    #[arg(long = "seed", value_name = "ID=NAME", value_parser = parse_seed)]
    pub seeds: Vec<(i64, String)>,
}

impl InitCmd {
    pub async fn run(&self, config_path: &Path) -> Result<()> {
        let config = Config::load(config_path)?;

        let mut db = Db::connect(&config.mysql).await?;
        let result = self.seed(&mut db).await;
        let closed = db.close().await;
        result?;
        closed?;

        println!("Initialized {} ({} rows)", config.mysql.redacted_dsn(), self.seeds.len());
        Ok(())
    }

    async fn seed(&self, db: &mut Db) -> Result<()> {
        db.migrate().await?;
        for (id, name) in &self.seeds {
            db.insert_user(*id, name).await?;
            info!(id, name = %name, "seeded row");
        }
        Ok(())
    }
}

fn parse_seed(s: &str) -> std::result::Result<(i64, String), String> {
    let (id, name) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=NAME, got '{s}'"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid id '{}'", id.trim()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty name for id {id}"));
    }
    Ok((id, name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("1=Alice").unwrap(), (1, "Alice".to_string()));
        assert_eq!(parse_seed(" 7 = Bob ").unwrap(), (7, "Bob".to_string()));
    }

    #[test]
    fn test_parse_seed_invalid() {
        assert!(parse_seed("Alice").is_err());
        assert!(parse_seed("x=Alice").is_err());
        assert!(parse_seed("1=").is_err());
    }
}
