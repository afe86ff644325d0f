//! Candidate evaluation pipeline
//!
//! Every candidate is evaluated independently with no shared mutable state,
//! so the pipeline can fan evaluations out across a thread pool; an ordered
//! collect restores input order either way.

use clap::ValueEnum;
use rayon::prelude::*;

use crate::filter::engine::MatchEngine;

/// Auto mode switches to parallel evaluation at this candidate count; below
/// it the thread-pool overhead outweighs the gain.
const MIN_FILES_FOR_PARALLEL: usize = 50;

/// Processing mode for candidate evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterMode {
    /// Pick sequential or parallel based on candidate count
    #[default]
    Auto,
    /// Single-threaded evaluation
    Sequential,
    /// Thread-pool evaluation, output order preserved
    Parallel,
}

pub struct FilterPipeline {
    engine: MatchEngine,
    mode: FilterMode,
}

impl FilterPipeline {
    pub fn new(engine: MatchEngine, mode: FilterMode) -> Self {
        FilterPipeline { engine, mode }
    }

    /// Return the candidates whose content satisfies every criterion, in
    /// input order, without deduplication.
    pub fn filter(&self, candidates: Vec<String>) -> Vec<String> {
        let parallel = match self.mode {
            FilterMode::Sequential => false,
            FilterMode::Parallel => true,
            FilterMode::Auto => candidates.len() >= MIN_FILES_FOR_PARALLEL,
        };

        if parallel {
            candidates
                .into_par_iter()
                .filter(|path| self.engine.matches(path))
                .collect()
        } else {
            candidates
                .into_iter()
                .filter(|path| self.engine.matches(path))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::criteria::CriteriaSet;
    use std::fs;
    use tempfile::TempDir;

    fn pipeline(patterns: &[&str], mode: FilterMode) -> FilterPipeline {
        let sensitive: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        let criteria = CriteriaSet::compile(&sensitive, &[]).unwrap();
        FilterPipeline::new(MatchEngine::new(criteria), mode)
    }

    fn fixture_paths(temp_dir: &TempDir, specs: &[(&str, &str)]) -> Vec<String> {
        specs
            .iter()
            .map(|(name, content)| {
                let path = temp_dir.path().join(name);
                fs::write(&path, content).unwrap();
                path.to_str().unwrap().to_string()
            })
            .collect()
    }

    #[test]
    fn keeps_only_matching_candidates_in_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let candidates = fixture_paths(
            &temp_dir,
            &[
                ("one", "hit\n"),
                ("two", "miss\n"),
                ("three", "hit\n"),
                ("four", "hit\n"),
            ],
        );

        let result = pipeline(&["hit"], FilterMode::Sequential).filter(candidates.clone());

        assert_eq!(
            result,
            vec![
                candidates[0].clone(),
                candidates[2].clone(),
                candidates[3].clone(),
            ]
        );
    }

    #[test]
    fn parallel_mode_preserves_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let specs: Vec<(String, &str)> = (0..64)
            .map(|i| (format!("file_{i:02}"), if i % 3 == 0 { "miss\n" } else { "hit\n" }))
            .collect();
        let specs_refs: Vec<(&str, &str)> =
            specs.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        let candidates = fixture_paths(&temp_dir, &specs_refs);

        let sequential = pipeline(&["hit"], FilterMode::Sequential).filter(candidates.clone());
        let parallel = pipeline(&["hit"], FilterMode::Parallel).filter(candidates);

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn duplicate_candidates_are_not_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let candidates = fixture_paths(&temp_dir, &[("dup", "hit\n")]);
        let doubled = vec![candidates[0].clone(), candidates[0].clone()];

        let result = pipeline(&["hit"], FilterMode::Sequential).filter(doubled.clone());

        assert_eq!(result, doubled);
    }

    #[test]
    fn empty_candidate_list_yields_empty_result() {
        let result = pipeline(&["hit"], FilterMode::Auto).filter(Vec::new());
        assert!(result.is_empty());
    }
}
