//! Extension classification.
//! Maps a file path to the destination folder name it belongs in. Pure and
//! deterministic: no I/O, so the mapping is trivially unit-testable.

use std::path::Path;

/// Folder name for files without a single clean extension.
pub const FALLBACK_CATEGORY: &str = "other";

/// Destination category for `path`.
///
/// A file name with exactly one extension segment (one dot producing a
/// non-empty suffix) is categorized by that suffix, lowercased. Everything
/// else lands in [`FALLBACK_CATEGORY`]: extensionless names, chained
/// extensions like `archive.tar.gz`, dotfiles, and names that are not valid
/// UTF-8. A leading dot marks a hidden file, not an extension separator,
/// so `.hidden` is fallback while `.hidden.txt` is `txt`.
///
/// The result is a single path segment; it never contains separators.
pub fn category(path: &Path) -> String {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return FALLBACK_CATEGORY.to_string();
    };

    let visible = name.strip_prefix('.').unwrap_or(name);
    let mut segments = visible.split('.');
    let _stem = segments.next();

    match (segments.next(), segments.next()) {
        (Some(ext), None) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => FALLBACK_CATEGORY.to_string(),
    }
}
