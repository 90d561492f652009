//! CLI command implementations.

mod config;
mod init;
mod lookup;

pub use config::ConfigCmd;
pub use init::InitCmd;
pub use lookup::LookupCmd;
