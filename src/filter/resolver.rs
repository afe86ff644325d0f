//! Path resolution and expansion
//!
//! Turns the raw path arguments (or the working directory) into a flat list
//! of candidate files: every explicit argument must exist, directories are
//! walked recursively, and dotted entries discovered during a walk are
//! excluded unless dotfiles are allowed. Explicit file arguments are never
//! excluded, dotted or not; the exclusion applies to what expansion finds,
//! not to what the user named.

use std::path::Path;

use ignore::WalkBuilder;
use tracing::warn;

use crate::error::SieveError;

/// Expand path arguments into candidate file paths, in discovery order.
///
/// An empty `paths` slice means "the working directory"; walks rooted at `.`
/// report their entries without the leading `./`.
pub fn resolve(paths: &[String], dotfiles_allowed: bool) -> Result<Vec<String>, SieveError> {
    let missing: Vec<&str> = paths
        .iter()
        .map(String::as_str)
        .filter(|path| !Path::new(path).exists())
        .collect();
    if !missing.is_empty() {
        return Err(SieveError::InvalidPath(missing.join(", ")));
    }

    let implicit = [String::from(".")];
    let effective = if paths.is_empty() { &implicit[..] } else { paths };

    let mut candidates = Vec::new();
    for root in effective {
        if Path::new(root).is_dir() {
            expand_directory(root, dotfiles_allowed, &mut candidates);
        } else {
            candidates.push(root.clone());
        }
    }

    Ok(candidates)
}

/// Walk a directory and collect every non-directory descendant.
///
/// The walker's hidden-entry filter implements the dotfile rule: it skips
/// dotted files and never descends into dotted directories, while the walk
/// root itself is always exempt.
fn expand_directory(root: &str, dotfiles_allowed: bool, candidates: &mut Vec<String>) {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(!dotfiles_allowed)
        .follow_links(false)
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().map_or(false, |ft| !ft.is_dir()) {
                    candidates.push(display_path(entry.path(), root));
                }
            }
            Err(err) => {
                // Unreadable subtrees cost a warning, never the whole run.
                warn!(%err, "skipping unreadable directory entry");
            }
        }
    }
}

fn display_path(path: &Path, root: &str) -> String {
    if root == "." {
        if let Ok(stripped) = path.strip_prefix(".") {
            return stripped.to_string_lossy().into_owned();
        }
    }
    path.to_string_lossy().into_owned()
}
