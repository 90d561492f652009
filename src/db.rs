//! Database access for the `user` table.
//!
//! Goes through the sqlx `Any` driver so the same queries run against MySQL or
//! SQLite, selected by the connection URL. One connection, opened once; a
//! failed connect is reported as-is.

use std::fmt;

use sqlx::{AnyConnection, Connection};
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::errors::{Result, Sentinel, WrapErr};

/// A single database connection.
pub struct Db {
    conn: AnyConnection,
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("backend", &self.conn.backend_name())
            .finish_non_exhaustive()
    }
}

impl Db {
    /// Connect using the settings from the config file.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let url = config.connect_url()?;
        Self::open(&url)
            .await
            .wrap_with(|| format!("failed to connect to {}", config.redacted_dsn()))
    }

    /// Connect to a driver URL (`mysql://…`, `sqlite://…`, `sqlite::memory:`).
    pub async fn open(url: &str) -> Result<Self> {
        sqlx::any::install_default_drivers();

        let conn = AnyConnection::connect(url)
            .await
            .wrap("failed to open connection")?;

        Ok(Self { conn })
    }

    /// Create the `user` table if it does not exist yet.
    pub async fn migrate(&mut self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY,
                name VARCHAR(24) NOT NULL
            )
            "#,
        )
        .execute(&mut self.conn)
        .await
        .wrap("failed to create user table")?;

        Ok(())
    }

    /// Insert a user, replacing any existing row with the same id.
    pub async fn insert_user(&mut self, id: i64, name: &str) -> Result<()> {
        sqlx::query("REPLACE INTO user (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut self.conn)
            .await
            .wrap_with(|| format!("failed to insert id={id}"))?;

        Ok(())
    }

    /// Look up a user's name by primary key.
    ///
    /// A missing row comes back as [`Sentinel::NoRows`] wrapped with the key that
    /// was searched for.
    pub async fn query_name_by_id(&mut self, id: i64) -> Result<String> {
        debug!(id, "querying name");

        let name: Option<String> = sqlx::query_scalar("SELECT name FROM user WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut self.conn)
            .await
            .wrap_with(|| format!("failed to query id={id}"))?;

        name.ok_or(Sentinel::NoRows)
            .wrap_with(|| format!("no id={id}"))
    }

    /// Close the connection.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await.wrap("failed to close connection")
    }
}
