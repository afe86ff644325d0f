//! Per-file match evaluation
//!
//! A file qualifies when every criterion matches at least one of its lines.
//! Content a reader cannot line-scan can never contain a match, so open,
//! decode, and read failures all classify the file as non-matching; they are
//! warned on the diagnostic stream and never abort the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::filter::criteria::CriteriaSet;

pub struct MatchEngine {
    criteria: CriteriaSet,
}

impl MatchEngine {
    pub fn new(criteria: CriteriaSet) -> Self {
        MatchEngine { criteria }
    }

    /// Decide whether every criterion matches somewhere in the file.
    ///
    /// Each pattern needs only one matching line; once satisfied it is not
    /// re-tested, and reading stops as soon as nothing is left to satisfy.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable file");
                return false;
            }
        };

        let mut satisfied = vec![false; self.criteria.len()];
        let mut unsatisfied = self.criteria.len();

        for line in BufReader::new(file).lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping unreadable file");
                    return false;
                }
            };

            for (index, pattern) in self.criteria.iter().enumerate() {
                if !satisfied[index] && pattern.is_match(&line) {
                    satisfied[index] = true;
                    unsatisfied -= 1;
                }
            }

            if unsatisfied == 0 {
                return true;
            }
        }

        unsatisfied == 0
    }
}
