//! Layered error context for a config-driven row lookup.
//!
//! [`errors`] holds the wrapping machinery; [`config`] and [`db`] are the two
//! boundaries that feed it failures.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod errors;
