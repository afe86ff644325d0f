//! # Linesieve - Content-Criteria File Filtering
//!
//! Linesieve reports exactly those files in which every configured regular
//! expression matches at least one line. Criteria come in a case-sensitive
//! and a case-insensitive bucket; a file qualifies only when all of them,
//! across both buckets, find a match somewhere in its content.
//!
//! ## Quick Start
//!
//! ```bash
//! # Files under src/ that mention both terms
//! linesieve -e 'Criteria' -i 'pipeline' src
//!
//! # The working directory, dotfiles included
//! linesieve -d -e 'TODO'
//! ```

pub mod cli;
pub mod error;
pub mod filter;

pub use cli::Cli;
pub use error::SieveError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
