//! Coarse classification of a failure by its root cause.

use std::error::Error as StdError;
use std::fmt;

use super::{Sentinel, cause};

/// What kind of failure ended a wrap chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File missing or unreadable.
    Io,
    /// Malformed structured data.
    Parse,
    /// Backend unreachable, misconfigured, or the query itself failed.
    Connection,
    /// Valid query, no matching record.
    NotFound,
    Other,
}

impl ErrorKind {
    /// Classify `err` by inspecting its cause only.
    pub fn of(err: &(dyn StdError + 'static)) -> Self {
        let root = cause(err);
        if root.downcast_ref::<Sentinel>() == Some(&Sentinel::NoRows) {
            ErrorKind::NotFound
        } else if root.is::<std::io::Error>() {
            ErrorKind::Io
        } else if root.is::<serde_json::Error>() {
            ErrorKind::Parse
        } else if root.is::<sqlx::Error>() || root.is::<url::ParseError>() {
            ErrorKind::Connection
        } else {
            ErrorKind::Other
        }
    }

    /// Expected absences are reported quietly; everything else is loud.
    pub fn is_expected(self) -> bool {
        matches!(self, ErrorKind::NotFound)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::Parse => "parse",
            ErrorKind::Connection => "connection",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
