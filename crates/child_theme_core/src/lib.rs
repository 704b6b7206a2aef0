//! # Child Theme Core
//!
//! Generates child theme scaffolds: small theme directories that extend an
//! installed parent theme and inherit its templates and styles.
//!
//! ## Overview
//!
//! A scaffold is built in three stages:
//! 1. Raw input is validated into an immutable [`ThemeRequest`] by
//!    [`ThemeRequestBuilder`]
//! 2. A [`ParentTheme`] is supplied by the host or read from disk with
//!    [`ParentTheme::load`]
//! 3. [`ScaffoldBuilder::build`] creates `<theme_root>/<slug>-child`, writes
//!    the generated files, copies requested parent files and activates the
//!    new theme through a [`ThemeActivator`]
//!
//! ## Examples
//!
//! ```no_run
//! use child_theme_core::{ActiveThemeFile, ParentTheme, ScaffoldBuilder, ThemeRequestBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parent = ParentTheme::load("/srv/wp-content/themes/twentytwentyfour")?;
//!
//! let request = ThemeRequestBuilder::new("Studio")
//!     .author("Jane Doe")
//!     .author_uri("https://example.com")
//!     .tags("blog, one-column")
//!     .build()?;
//!
//! let scaffold = ScaffoldBuilder::new("/srv/wp-content/themes")
//!     .with_activator(ActiveThemeFile::new("/srv/state/active-theme.toml"))
//!     .build(request, &parent)?;
//!
//! for file in &scaffold.files {
//!     println!("{} ({} bytes)", file.relative_path, file.size);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Input problems are reported as [`ValidationError`] before anything is
//! written. Filesystem, rendering and activation failures are
//! [`ScaffoldError`]s; a failed build never leaves a partial directory
//! behind.

mod activation;
mod builder;
pub mod errors;
mod parent;
mod parent_files;
mod request;
mod templates;
mod text_domain;
mod theme_name;

pub use activation::{ActiveTheme, ActiveThemeFile, LogActivator, ThemeActivator};
pub use builder::{FileKind, GeneratedFile, GeneratedScaffold, ScaffoldBuilder};
pub use errors::{ScaffoldError, ScaffoldResult, ValidationError};
pub use parent::{header_field, ParentTheme};
pub use parent_files::{
    list_parent_files, resolve_parent_file, sanitize_relative_path, ResolvedParentFile,
    SkipReason, DEFAULT_MAX_DEPTH, SKIPPED_DIRECTORIES,
};
pub use request::{
    ThemeRequest, ThemeRequestBuilder, Thumbnail, ALLOWED_THUMBNAIL_TYPES, MAX_THUMBNAIL_BYTES,
};
pub use templates::{
    RenderedFile, ScaffoldTemplates, CHILD_THEME_VERSION, FUNCTIONS_PHP, INDEX_PHP, README_TXT,
    STYLE_CSS,
};
pub use text_domain::{function_prefix, TextDomain, FALLBACK_IDENTIFIER};
pub use theme_name::{
    sanitize_text_field, sanitize_textarea_field, slugify, ThemeName, CHILD_SUFFIX,
    MIN_NAME_LENGTH,
};
