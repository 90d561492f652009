use thiserror::Error;

/// Well-known conditions that callers branch on.
///
/// Leaf operations return these unwrapped; intermediate layers are free to wrap
/// them. Recognise one with [`is`](super::is), never by message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Sentinel {
    /// A query that expected a row found none.
    #[error("no rows in result set")]
    NoRows,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_message() {
        assert_eq!(Sentinel::NoRows.to_string(), "no rows in result set");
    }
}
