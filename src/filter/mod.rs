//! Content-criteria file filtering
//!
//! The core of linesieve: the resolver expands path arguments into candidate
//! files, the match engine decides per file whether every criterion matches
//! at least one line, and the pipeline collects the qualifying subset in
//! input order.

pub mod criteria;
pub mod engine;
pub mod pipeline;
pub mod resolver;

pub use criteria::{CriteriaSet, Pattern};
pub use engine::MatchEngine;
pub use pipeline::{FilterMode, FilterPipeline};
