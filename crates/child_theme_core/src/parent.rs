//! Parent theme descriptor.
//!
//! The host normally supplies the parent theme. [`ParentTheme::load`] reads
//! one from disk the same way the host does: the directory name is the
//! stylesheet slug and the metadata comes from the header comment at the top
//! of `style.css`.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::parent_files::{list_parent_files, DEFAULT_MAX_DEPTH};

#[cfg(test)]
#[path = "parent_tests.rs"]
mod tests;

/// Only this many bytes at the start of `style.css` are scanned for headers.
const HEADER_SCAN_BYTES: u64 = 8 * 1024;

/// Read-only description of an installed parent theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentTheme {
    name: String,
    version: String,
    stylesheet_slug: String,
    root_directory: PathBuf,
}

impl ParentTheme {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        stylesheet_slug: impl Into<String>,
        root_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            stylesheet_slug: stylesheet_slug.into(),
            root_directory: root_directory.into(),
        }
    }

    /// Load a parent theme from its directory.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::ParentNotFound` if the directory does not
    /// exist, has no `style.css`, or the stylesheet has no `Theme Name`
    /// header. Read failures of an existing stylesheet are `ScaffoldError::Io`.
    pub fn load(directory: impl AsRef<Path>) -> ScaffoldResult<Self> {
        let directory = directory.as_ref();

        if !directory.is_dir() {
            return Err(ScaffoldError::parent_not_found(
                directory,
                "directory does not exist",
            ));
        }

        let root_directory = directory
            .canonicalize()
            .map_err(|e| ScaffoldError::io("resolve", directory, e))?;

        let stylesheet_slug = root_directory
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ScaffoldError::parent_not_found(&root_directory, "directory name is not valid UTF-8")
            })?;

        let style_path = root_directory.join("style.css");
        if !style_path.is_file() {
            return Err(ScaffoldError::parent_not_found(
                &root_directory,
                "style.css is missing",
            ));
        }

        let header = read_header(&style_path)?;

        let name = header_field(&header, "Theme Name").ok_or_else(|| {
            ScaffoldError::parent_not_found(&root_directory, "style.css has no Theme Name header")
        })?;
        let version = header_field(&header, "Version").unwrap_or_default();

        if let Some(template) = header_field(&header, "Template") {
            warn!(
                parent = %stylesheet_slug,
                template = %template,
                "Parent theme is itself a child theme"
            );
        }

        debug!(
            name = %name,
            version = %version,
            slug = %stylesheet_slug,
            "Loaded parent theme"
        );

        Ok(Self {
            name,
            version,
            stylesheet_slug,
            root_directory,
        })
    }

    /// Display name, from the `Theme Name` header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared version, from the `Version` header; may be empty.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Directory name of the parent theme; used as the child's `Template`.
    pub fn stylesheet_slug(&self) -> &str {
        &self.stylesheet_slug
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Lists the parent theme's files, see [`list_parent_files`].
    pub fn list_files(&self) -> ScaffoldResult<Vec<String>> {
        list_parent_files(&self.root_directory, DEFAULT_MAX_DEPTH)
    }
}

fn read_header(path: &Path) -> ScaffoldResult<String> {
    let file = File::open(path).map_err(|e| ScaffoldError::io("open", path, e))?;

    let mut buffer = Vec::new();
    file.take(HEADER_SCAN_BYTES)
        .read_to_end(&mut buffer)
        .map_err(|e| ScaffoldError::io("read", path, e))?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Extracts a `Field: value` header from a theme file's leading comment.
///
/// Matching is case-insensitive and tolerates comment decoration (`*`, `#`,
/// `@`, `/`) before the field name. A trailing `*/` is removed from the
/// value. Empty values count as absent.
pub fn header_field(content: &str, field: &str) -> Option<String> {
    let pattern = format!(r"(?mi)^[ \t/*#@]*{}:(.*)$", regex::escape(field));
    let regex = Regex::new(&pattern).ok()?;

    let raw = regex.captures(content)?.get(1)?.as_str();
    let value = match raw.find("*/") {
        Some(end) => &raw[..end],
        None => raw,
    }
    .trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
