//! Child theme scaffold generation.
//!
//! [`ScaffoldBuilder::build`] runs the whole pipeline for one request:
//!
//! ```text
//! resolve target path
//!     → create directory (atomic, fails if present)
//!     → write style.css, functions.php, index.php, readme.txt
//!     → write screenshot (optional)
//!     → copy requested parent files (optional)
//!     → activate
//! ```
//!
//! Each step is a precondition for the next. When a step after directory
//! creation fails, the directory created by this build is removed again
//! before the error is returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, error, info, warn};

use crate::activation::{LogActivator, ThemeActivator};
use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::parent::ParentTheme;
use crate::parent_files::{resolve_parent_file, SkipReason};
use crate::request::ThemeRequest;
use crate::templates::{RenderedFile, ScaffoldTemplates};
use crate::theme_name::ThemeName;

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

/// Origin of a file in a generated scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Template,
    Screenshot,
    ParentCopy,
}

/// A file written during a scaffold build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Path relative to the child theme directory, `/`-separated.
    pub relative_path: String,
    pub kind: FileKind,
    /// Number of bytes written.
    pub size: u64,
    /// Lowercase hex SHA-256 of the bytes written.
    pub digest: String,
}

/// Result of a successful scaffold build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedScaffold {
    /// Directory name of the child theme, also its stylesheet slug.
    pub slug: String,
    /// Absolute path of the child theme directory.
    pub directory: PathBuf,
    /// Files in the order they were written.
    pub files: Vec<GeneratedFile>,
    /// Requested parent files that were not copied.
    pub skipped_parent_files: Vec<String>,
}

impl GeneratedScaffold {
    /// Last written entry for `relative_path`.
    pub fn file(&self, relative_path: &str) -> Option<&GeneratedFile> {
        self.files
            .iter()
            .rev()
            .find(|f| f.relative_path == relative_path)
    }

    pub fn files_of_kind(&self, kind: FileKind) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }
}

/// Generates child theme directories below a theme root.
///
/// # Examples
///
/// ```no_run
/// use child_theme_core::{ParentTheme, ScaffoldBuilder, ThemeRequestBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let parent = ParentTheme::load("/srv/wp-content/themes/twentytwentyfour")?;
/// let request = ThemeRequestBuilder::new("Studio")
///     .author("Jane Doe")
///     .copy_parent_file("header.php")
///     .build()?;
///
/// let scaffold = ScaffoldBuilder::new("/srv/wp-content/themes").build(request, &parent)?;
/// println!("Created {}", scaffold.directory.display());
/// # Ok(())
/// # }
/// ```
pub struct ScaffoldBuilder {
    theme_root: PathBuf,
    activator: Box<dyn ThemeActivator>,
}

impl ScaffoldBuilder {
    /// Create a builder writing below `theme_root`, activating through
    /// [`LogActivator`].
    pub fn new(theme_root: impl Into<PathBuf>) -> Self {
        Self {
            theme_root: theme_root.into(),
            activator: Box::new(LogActivator),
        }
    }

    pub fn with_activator(mut self, activator: impl ThemeActivator + 'static) -> Self {
        self.activator = Box::new(activator);
        self
    }

    pub fn theme_root(&self) -> &Path {
        &self.theme_root
    }

    /// Directory a child theme with this name is generated into.
    pub fn target_directory(&self, name: &ThemeName) -> PathBuf {
        self.theme_root.join(name.directory_name())
    }

    /// Generate the child theme described by `request`.
    ///
    /// # Errors
    ///
    /// - `ScaffoldError::AlreadyExists` if the target directory exists; it is left untouched
    /// - `ScaffoldError::Template` if a generated file cannot be rendered
    /// - `ScaffoldError::Io` if creating the directory or writing a file fails
    /// - `ScaffoldError::ParentNotFound` if parent files are requested but the
    ///   parent root is gone
    /// - any error returned by the activator
    pub fn build(
        &self,
        request: ThemeRequest,
        parent: &ParentTheme,
    ) -> ScaffoldResult<GeneratedScaffold> {
        let slug = request.name().directory_name();
        let target = self.target_directory(request.name());

        info!(
            name = %request.name(),
            parent = %parent.stylesheet_slug(),
            target = ?target,
            "Creating child theme"
        );

        // Render before the directory exists.
        let rendered = ScaffoldTemplates::new()?.render_all(&request, parent)?;

        if target.symlink_metadata().is_ok() {
            warn!(target = ?target, "Child theme directory already exists");
            return Err(ScaffoldError::AlreadyExists { path: target });
        }

        let guard = self.create_target(&target)?;

        let result = self.populate(guard.path(), &slug, &request, parent, rendered);
        match result {
            Ok(scaffold) => {
                guard.keep();
                info!(
                    slug = %scaffold.slug,
                    files = scaffold.files.len(),
                    skipped = scaffold.skipped_parent_files.len(),
                    "Child theme created"
                );
                Ok(scaffold)
            }
            Err(e) => {
                error!(target = ?target, error = %e, "Child theme creation failed, rolling back");
                Err(e)
            }
        }
    }

    fn create_target(&self, target: &Path) -> ScaffoldResult<CreatedDirectory> {
        fs::create_dir_all(&self.theme_root)
            .map_err(|e| ScaffoldError::io("create directory", &self.theme_root, e))?;

        match fs::create_dir(target) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                warn!(target = ?target, "Child theme directory was created concurrently");
                return Err(ScaffoldError::AlreadyExists {
                    path: target.to_path_buf(),
                });
            }
            Err(e) => {
                error!(target = ?target, error = %e, "Failed to create child theme directory");
                return Err(ScaffoldError::io("create directory", target, e));
            }
        }

        let guard = CreatedDirectory::new(target.to_path_buf());
        let absolute = target
            .canonicalize()
            .map_err(|e| ScaffoldError::io("resolve", target, e))?;

        debug!(directory = ?absolute, "Created child theme directory");
        Ok(guard.with_path(absolute))
    }

    fn populate(
        &self,
        directory: &Path,
        slug: &str,
        request: &ThemeRequest,
        parent: &ParentTheme,
        rendered: Vec<RenderedFile>,
    ) -> ScaffoldResult<GeneratedScaffold> {
        let mut files = Vec::new();

        info!(count = rendered.len(), "Writing child theme files");
        for file in rendered {
            files.push(write_file(
                directory,
                file.file_name,
                file.content.as_bytes(),
                FileKind::Template,
            )?);
        }

        if let Some(thumbnail) = request.thumbnail() {
            let file_name = thumbnail.screenshot_file_name();
            info!(file = %file_name, size = thumbnail.len(), "Writing screenshot");
            files.push(write_file(
                directory,
                &file_name,
                thumbnail.bytes(),
                FileKind::Screenshot,
            )?);
        }

        let mut skipped_parent_files = Vec::new();
        if !request.copy_parent_files().is_empty() {
            info!(
                count = request.copy_parent_files().len(),
                "Copying files from parent theme"
            );
            let parent_root = parent.root_directory().canonicalize().map_err(|_| {
                ScaffoldError::parent_not_found(parent.root_directory(), "directory does not exist")
            })?;

            for requested in request.copy_parent_files() {
                match resolve_parent_file(&parent_root, requested) {
                    Ok(resolved) => {
                        let bytes = fs::read(&resolved.source)
                            .map_err(|e| ScaffoldError::io("read", &resolved.source, e))?;
                        files.push(write_file(
                            directory,
                            &resolved.relative_path,
                            &bytes,
                            FileKind::ParentCopy,
                        )?);
                    }
                    Err(SkipReason::Missing) => {
                        debug!(file = %requested, "Requested parent file does not exist, skipping");
                        skipped_parent_files.push(requested.clone());
                    }
                    Err(reason) => {
                        warn!(file = %requested, reason = %reason, "Skipping parent file");
                        skipped_parent_files.push(requested.clone());
                    }
                }
            }
        }

        info!(stylesheet = %slug, "Activating child theme");
        self.activator.activate(slug, parent)?;

        Ok(GeneratedScaffold {
            slug: slug.to_string(),
            directory: directory.to_path_buf(),
            files,
            skipped_parent_files,
        })
    }
}

impl std::fmt::Debug for ScaffoldBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaffoldBuilder")
            .field("theme_root", &self.theme_root)
            .finish_non_exhaustive()
    }
}

/// Writes `bytes` to `relative_path` below `directory`, creating missing
/// intermediate directories.
fn write_file(
    directory: &Path,
    relative_path: &str,
    bytes: &[u8],
    kind: FileKind,
) -> ScaffoldResult<GeneratedFile> {
    let path = directory.join(relative_path);

    if let Some(dir) = path.parent() {
        if !dir.is_dir() {
            fs::create_dir_all(dir).map_err(|e| ScaffoldError::io("create directory", dir, e))?;
        }
    }

    fs::write(&path, bytes).map_err(|e| ScaffoldError::io("write", &path, e))?;

    let digest = hex::encode(Sha256::digest(bytes));
    debug!(file = %relative_path, size = bytes.len(), digest = %digest, "Wrote file");

    Ok(GeneratedFile {
        relative_path: relative_path.to_string(),
        kind,
        size: bytes.len() as u64,
        digest,
    })
}

/// A directory created by the current build.
///
/// Removed on drop unless [`CreatedDirectory::keep`] was called.
struct CreatedDirectory {
    path: PathBuf,
    keep: bool,
}

impl CreatedDirectory {
    fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn keep(mut self) {
        self.keep = true;
    }
}

impl Drop for CreatedDirectory {
    fn drop(&mut self) {
        if self.keep {
            return;
        }

        match fs::remove_dir_all(&self.path) {
            Ok(()) => debug!(directory = ?self.path, "Removed partially created child theme"),
            Err(e) => warn!(
                directory = ?self.path,
                error = %e,
                "Failed to remove partially created child theme"
            ),
        }
    }
}
