//! Listing and resolving parent theme files.
//!
//! The listing feeds the "copy files from the parent" picker. Resolution
//! turns a requested relative path into a source file that is guaranteed to
//! live inside the parent theme directory.

use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::errors::{ScaffoldError, ScaffoldResult};

#[cfg(test)]
#[path = "parent_files_tests.rs"]
mod tests;

/// Default recursion limit for [`list_parent_files`].
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Directories never descended into while listing.
pub const SKIPPED_DIRECTORIES: [&str; 3] = ["node_modules", ".git", ".svn"];

/// Characters removed from every path segment.
const SPECIAL_CHARS: &[char] = &[
    '?', '[', ']', '\\', '=', '<', '>', ':', ';', ',', '\'', '"', '&', '$', '#', '*', '(', ')',
    '|', '~', '`', '!', '{', '}', '%', '+',
];

/// Lists all regular files below `parent_root`.
///
/// Paths are relative to `parent_root`, use `/` separators and are sorted.
/// `node_modules`, `.git` and `.svn` directories are skipped, symbolic links
/// are not followed, and nothing deeper than `max_depth` levels is returned
/// (depth 1 is the theme root itself).
///
/// # Errors
///
/// `ScaffoldError::ParentNotFound` if `parent_root` is not a directory,
/// `ScaffoldError::Io` if a directory cannot be read.
pub fn list_parent_files(parent_root: &Path, max_depth: usize) -> ScaffoldResult<Vec<String>> {
    if !parent_root.is_dir() {
        return Err(ScaffoldError::parent_not_found(
            parent_root,
            "directory does not exist",
        ));
    }

    let walker = WalkDir::new(parent_root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| !is_skipped_directory(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(parent_root).to_path_buf();
            ScaffoldError::io("list", path, io::Error::from(e))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(parent_root) {
            files.push(to_slash_path(relative));
        }
    }

    files.sort();
    debug!(count = files.len(), root = ?parent_root, "Listed parent theme files");
    Ok(files)
}

fn is_skipped_directory(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRECTORIES.contains(&name))
}

fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Sanitizes a requested relative file path.
///
/// Any path containing `..` is rejected outright, as are absolute paths and
/// drive-letter paths. Each segment then has special and control characters
/// removed and whitespace runs replaced by `-`; empty and `.` segments are
/// dropped. Backslashes are treated as separators.
///
/// # Errors
///
/// Returns a human-readable reason when the path is rejected.
///
/// # Examples
///
/// ```rust
/// use child_theme_core::sanitize_relative_path;
///
/// assert_eq!(sanitize_relative_path("template-parts/my header.php").unwrap(), "template-parts/my-header.php");
/// assert!(sanitize_relative_path("../../etc/passwd").is_err());
/// ```
pub fn sanitize_relative_path(requested: &str) -> Result<String, String> {
    let requested = requested.trim();

    if requested.contains("..") {
        return Err("path contains '..'".to_string());
    }

    let normalized = requested.replace('\\', "/");
    let has_drive_letter = normalized.len() >= 2 && normalized.as_bytes()[1] == b':';
    if normalized.starts_with('/') || has_drive_letter || Path::new(requested).is_absolute() {
        return Err("absolute paths are not allowed".to_string());
    }

    let segments: Vec<String> = normalized
        .split('/')
        .map(sanitize_segment)
        .filter(|segment| !segment.is_empty() && segment != ".")
        .collect();

    if segments.is_empty() {
        return Err("path is empty after sanitization".to_string());
    }

    Ok(segments.join("/"))
}

fn sanitize_segment(segment: &str) -> String {
    let cleaned: String = segment
        .chars()
        .filter(|c| !SPECIAL_CHARS.contains(c) && !c.is_control())
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches('-')
        .to_string()
}

/// Why a requested parent file was not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The path failed sanitization.
    Unsafe(String),
    /// No file exists at the resolved location.
    Missing,
    /// The resolved location exists but is not a regular file.
    NotAFile,
    /// The resolved location escapes the parent theme directory.
    OutsideParent,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsafe(reason) => write!(f, "unsafe path: {reason}"),
            Self::Missing => write!(f, "file does not exist"),
            Self::NotAFile => write!(f, "not a regular file"),
            Self::OutsideParent => write!(f, "resolves outside the parent theme"),
        }
    }
}

/// A requested parent file that is safe to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParentFile {
    /// Sanitized relative path, used for both source and destination.
    pub relative_path: String,
    /// Canonical source location inside the parent theme.
    pub source: PathBuf,
}

/// Resolves a requested file against a canonical parent theme root.
///
/// `parent_root` must already be canonicalized; symbolic links in the
/// requested path are resolved and the result must stay below it.
pub fn resolve_parent_file(
    parent_root: &Path,
    requested: &str,
) -> Result<ResolvedParentFile, SkipReason> {
    let relative_path = sanitize_relative_path(requested).map_err(SkipReason::Unsafe)?;

    let candidate = parent_root.join(&relative_path);
    let source = match candidate.canonicalize() {
        Ok(source) => source,
        Err(_) => return Err(SkipReason::Missing),
    };

    if !source.starts_with(parent_root) {
        return Err(SkipReason::OutsideParent);
    }

    if !source.is_file() {
        return Err(SkipReason::NotAFile);
    }

    Ok(ResolvedParentFile {
        relative_path,
        source,
    })
}
