//! Source tree scanning.
//! Walks the source root and collects the regular files eligible for a move,
//! optionally restricted by an extension filter. A missing root is a hard
//! error, never an empty result.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::StructuralError;

/// Set of extension tokens a scan is restricted to.
///
/// Tokens are normalized on construction: trimmed, lowercased, and stripped
/// of leading dots, so `-t .JPG` and `-t jpg` select the same files.
/// Membership is tested against a path's final extension, lowercased.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    tokens: HashSet<String>,
}

impl ExtensionFilter {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    /// An empty filter accepts nothing; callers wanting "accept all" pass no
    /// filter at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Case-insensitive match on the path's final extension.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.tokens.contains(&e.to_ascii_lowercase()))
    }
}

/// Collect every regular file under `root`, in walk order.
///
/// Symlinks are not followed and never included; directories and special
/// files are skipped. Unreadable subtrees are logged and skipped so one bad
/// directory does not sink the whole scan. Only a missing or non-directory
/// root aborts.
pub fn scan_candidates(
    root: &Path,
    filter: Option<&ExtensionFilter>,
) -> Result<Vec<PathBuf>, StructuralError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(StructuralError::SourceNotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StructuralError::SourceMissing(root.to_path_buf()));
        }
        Err(e) => {
            return Err(StructuralError::SourceUnreadable {
                path: root.to_path_buf(),
                source: e,
            });
        }
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry during scan");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if let Some(f) = filter {
            if !f.matches(&path) {
                debug!(path = %path.display(), "filtered out by extension");
                continue;
            }
        }
        candidates.push(path);
    }
    Ok(candidates)
}
