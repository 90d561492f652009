//! Database configuration loaded from a JSON file.
//!
//! The file lives next to the process by default (`./config.json`):
//!
//! ```json
//! { "Mysql": { "User": "root", "Password": "secret", "Host": "127.0.0.1", "Port": 3306, "Database": "test" } }
//! ```
//!
//! Keys are accepted capitalised or lowercase.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;
use url::Url;

use crate::errors::{Result, WrapErr};

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(alias = "Mysql", alias = "MySQL")]
    pub mysql: DatabaseConfig,
}

/// Connection settings for the backing database.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    #[serde(alias = "User")]
    pub user: String,

    #[serde(alias = "Password", deserialize_with = "secret_string")]
    pub password: SecretString,

    #[serde(alias = "Host")]
    pub host: String,

    #[serde(alias = "Port")]
    pub port: u16,

    #[serde(alias = "Database")]
    pub database: String,

    /// Which driver to connect with (default: mysql).
    #[serde(alias = "Driver", default)]
    pub driver: Driver,
}

/// Supported database drivers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    #[default]
    Mysql,
    /// `database` is a file path, or `:memory:`.
    Sqlite,
}

fn secret_string<'de, D>(deserializer: D) -> std::result::Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Config {
    /// Read and parse the config at `path`, relative paths resolving against the
    /// working directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = read_config(path)?;
        loads(&raw)
    }
}

impl DatabaseConfig {
    /// `user:password@host:port/database`.
    pub fn dsn(&self) -> String {
        self.format_dsn(self.password.expose_secret())
    }

    /// Same shape as [`dsn`](Self::dsn) with the password masked, for logs.
    pub fn redacted_dsn(&self) -> String {
        self.format_dsn("***")
    }

    fn format_dsn(&self, password: &str) -> String {
        format!(
            "{}:{}@{}:{}/{}",
            self.user, password, self.host, self.port, self.database
        )
    }

    /// Driver URL understood by the database layer.
    pub fn connect_url(&self) -> Result<String> {
        match self.driver {
            Driver::Sqlite if self.database == ":memory:" => Ok("sqlite::memory:".to_string()),
            Driver::Sqlite => {
                // Relative database files resolve like the config file itself
                let path = resolve(Path::new(&self.database))?;
                let mut url = Url::parse("sqlite://").wrap("invalid database address")?;
                url.set_path(&path.to_string_lossy());
                url.query_pairs_mut().append_pair("mode", "rwc");

                Ok(url.into())
            }
            Driver::Mysql => {
                let mut url = Url::parse(&format!(
                    "mysql://{}:{}/{}",
                    self.host, self.port, self.database
                ))
                .wrap_with(|| format!("invalid database address {}", self.redacted_dsn()))?;

                url.set_username(&self.user)
                    .and_then(|()| url.set_password(Some(self.password.expose_secret())))
                    .map_err(|()| {
                        sqlx::Error::Configuration("url cannot carry credentials".into())
                    })
                    .wrap("invalid database address")?;
                url.query_pairs_mut().append_pair("charset", "utf8mb4");

                Ok(url.into())
            }
        }
    }
}

/// Read the whole file at `path`.
///
/// The handle is dropped before returning on every path.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).wrap("open failed")?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).wrap("read failed")?;
    Ok(data)
}

/// Read the raw config bytes at `path`.
pub fn read_config(path: &Path) -> Result<Vec<u8>> {
    let path = resolve(path)?;
    debug!(path = %path.display(), "reading config");
    read_file(&path).with_message("failed to read config")
}

/// Parse JSON bytes into `T`.
pub fn loads<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    serde_json::from_slice(raw).wrap("failed to load json")
}

fn resolve(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().wrap("failed to get work directory")?;
    Ok(cwd.join(path))
}
