//! Configuration-error taxonomy for the filter core.
//!
//! Everything here is detected before the first file is scanned. The binary
//! downcasts to [`SieveError`] to decide whether a failure gets the usage
//! banner and the usage-error exit status.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SieveError {
    /// One or more explicitly supplied path arguments do not exist.
    #[error("path arguments do not exist: {0}")]
    InvalidPath(String),

    /// No pattern was supplied at all. A filter with no predicate is a
    /// misuse, not "match everything".
    #[error("no criteria given: supply at least one -e or -i regex")]
    NoCriteria,

    /// A raw pattern is not a valid regular expression.
    #[error("invalid regex '{pattern}': {source}")]
    PatternSyntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
