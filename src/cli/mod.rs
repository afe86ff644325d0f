//! Command-line interface for linesieve
//!
//! This module provides the CLI structure and orchestration: it collects the
//! raw criterion strings and path arguments via clap, then drives the filter
//! core and renders the qualifying paths for stdout.

use anyhow::Result;
use clap::Parser;

pub mod output;

use crate::filter::{CriteriaSet, FilterMode, FilterPipeline, MatchEngine, resolver};

/// Report files in which every given regex matches at least one line
#[derive(Debug, Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Require REGEX to match at least one line (repeatable)
    #[arg(short = 'e', long = "regex", value_name = "REGEX")]
    pub regex: Vec<String>,

    /// Like -e, but matched case-insensitively (repeatable)
    #[arg(short = 'i', long = "ignore-case-regex", value_name = "REGEX")]
    pub ignore_case_regex: Vec<String>,

    /// Include dotfiles discovered while expanding directories
    #[arg(short = 'd', long)]
    pub dotfiles: bool,

    /// Processing mode: auto (smart default), parallel, or sequential
    #[arg(long, value_enum, default_value = "auto")]
    pub mode: FilterMode,

    /// Files or directories to filter (defaults to the working directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl Cli {
    /// Run the filter and return the report text for stdout.
    ///
    /// Criteria are compiled before any filesystem access, so pattern and
    /// no-criteria errors surface even when the path arguments are also bad.
    pub fn run(&self) -> Result<String> {
        let criteria = CriteriaSet::compile(&self.regex, &self.ignore_case_regex)?;
        let candidates = resolver::resolve(&self.paths, self.dotfiles)?;

        let pipeline = FilterPipeline::new(MatchEngine::new(criteria), self.mode);
        Ok(output::render(&pipeline.filter(candidates)))
    }
}
