//! Criterion compilation
//!
//! Raw pattern strings are collected during argument parsing and compiled
//! together here, in a second phase, so that every syntax error surfaces
//! before any filesystem access happens.

use regex::RegexBuilder;

use crate::error::SieveError;

/// A single compiled criterion: the raw text plus its case sensitivity.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    case_insensitive: bool,
    regex: regex::Regex,
}

impl Pattern {
    fn compile(raw: &str, case_insensitive: bool) -> Result<Self, SieveError> {
        let regex = RegexBuilder::new(raw)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| SieveError::PatternSyntax {
                pattern: raw.to_string(),
                source,
            })?;

        Ok(Pattern {
            raw: raw.to_string(),
            case_insensitive,
            regex,
        })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The raw pattern text as the user supplied it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

/// The full set of criteria a file must satisfy: the case-sensitive bucket
/// followed by the case-insensitive bucket.
#[derive(Debug, Clone)]
pub struct CriteriaSet {
    patterns: Vec<Pattern>,
}

impl CriteriaSet {
    /// Compile both buckets into matchers.
    ///
    /// Fails with [`SieveError::NoCriteria`] when no pattern was supplied at
    /// all, and with [`SieveError::PatternSyntax`] on the first pattern the
    /// regex engine rejects.
    pub fn compile(sensitive: &[String], insensitive: &[String]) -> Result<Self, SieveError> {
        if sensitive.is_empty() && insensitive.is_empty() {
            return Err(SieveError::NoCriteria);
        }

        let mut patterns = Vec::with_capacity(sensitive.len() + insensitive.len());
        for raw in sensitive {
            patterns.push(Pattern::compile(raw, false)?);
        }
        for raw in insensitive {
            patterns.push(Pattern::compile(raw, true)?);
        }

        Ok(CriteriaSet { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}
