//! Child theme creation request types
//!
//! A [`ThemeRequest`] is assembled once at the system boundary from raw form
//! or command line input, validated in a single pass by
//! [`ThemeRequestBuilder::build`], and then handed to
//! [`crate::ScaffoldBuilder::build`], which consumes it.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

use tracing::warn;
use url::Url;

use crate::errors::ValidationError;
use crate::text_domain::TextDomain;
use crate::theme_name::{sanitize_text_field, sanitize_textarea_field, ThemeName};

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// Largest accepted thumbnail, in bytes (2 MiB).
pub const MAX_THUMBNAIL_BYTES: usize = 2 * 1024 * 1024;

/// MIME types accepted for the theme thumbnail.
pub const ALLOWED_THUMBNAIL_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// An uploaded thumbnail image, as received from the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl Thumbnail {
    /// Wraps an uploaded file. No validation happens here; see
    /// [`Thumbnail::validate`].
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Original file name supplied by the client.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declared MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks the MIME type against [`ALLOWED_THUMBNAIL_TYPES`] and the size
    /// against [`MAX_THUMBNAIL_BYTES`].
    ///
    /// # Errors
    /// Returns `ValidationError` for a disallowed type or an oversized file
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !ALLOWED_THUMBNAIL_TYPES.contains(&self.mime_type.as_str()) {
            return Err(ValidationError::invalid_format(
                "thumbnail",
                format!(
                    "invalid file type '{}', only JPG, PNG, and GIF files are allowed",
                    self.mime_type
                ),
            ));
        }

        if self.bytes.len() > MAX_THUMBNAIL_BYTES {
            return Err(ValidationError::too_large(
                "thumbnail",
                self.bytes.len(),
                MAX_THUMBNAIL_BYTES,
            ));
        }

        Ok(())
    }

    /// Extension used for the screenshot file.
    ///
    /// Taken from the client file name as-is. Only when the file name has no
    /// usable extension is one derived from the MIME type.
    pub fn extension(&self) -> String {
        let from_name = Path::new(&self.file_name)
            .extension()
            .and_then(OsStr::to_str)
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        match from_name {
            Some(ext) => ext.to_string(),
            None => match self.mime_type.as_str() {
                "image/png" => "png",
                "image/gif" => "gif",
                _ => "jpg",
            }
            .to_string(),
        }
    }

    /// File name of the screenshot inside the child theme: `screenshot.<ext>`.
    pub fn screenshot_file_name(&self) -> String {
        format!("screenshot.{}", self.extension())
    }
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Validated metadata for a new child theme.
///
/// Constructed through [`ThemeRequestBuilder`]; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ThemeRequest {
    display_name: String,
    name: ThemeName,
    author: String,
    author_uri: Option<String>,
    description: String,
    theme_uri: Option<String>,
    tags: String,
    text_domain: TextDomain,
    copy_parent_files: BTreeSet<String>,
    thumbnail: Option<Thumbnail>,
}

impl ThemeRequest {
    /// Start building a request for the given raw theme name.
    pub fn builder(name: impl Into<String>) -> ThemeRequestBuilder {
        ThemeRequestBuilder::new(name)
    }

    /// Sanitized name as entered, written to the `Theme Name` header.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Name with the word "child" removed; the slug and directory derive from it.
    pub fn name(&self) -> &ThemeName {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn author_uri(&self) -> Option<&str> {
        self.author_uri.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn theme_uri(&self) -> Option<&str> {
        self.theme_uri.as_deref()
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    pub fn text_domain(&self) -> &TextDomain {
        &self.text_domain
    }

    /// Relative parent theme paths requested for copying, in sorted order.
    pub fn copy_parent_files(&self) -> &BTreeSet<String> {
        &self.copy_parent_files
    }

    pub fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }
}

/// Builder for [`ThemeRequest`].
///
/// # Examples
///
/// ```rust
/// use child_theme_core::ThemeRequestBuilder;
///
/// let request = ThemeRequestBuilder::new("Acme Child")
///     .author("Jane Doe")
///     .author_uri("https://example.com")
///     .tags("responsive, business")
///     .copy_parent_file("header.php")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.display_name(), "Acme Child");
/// assert_eq!(request.name().as_str(), "Acme");
/// assert_eq!(request.text_domain().as_str(), "acme-child");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeRequestBuilder {
    name: String,
    author: Option<String>,
    author_uri: Option<String>,
    description: Option<String>,
    theme_uri: Option<String>,
    tags: Option<String>,
    text_domain: Option<String>,
    copy_parent_files: BTreeSet<String>,
    thumbnail: Option<Thumbnail>,
}

impl ThemeRequestBuilder {
    /// Create a new builder with the required theme name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the author URL. See [`ThemeRequestBuilder::build`] for normalization.
    pub fn author_uri(mut self, uri: impl Into<String>) -> Self {
        self.author_uri = Some(uri.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the theme URL. See [`ThemeRequestBuilder::build`] for normalization.
    pub fn theme_uri(mut self, uri: impl Into<String>) -> Self {
        self.theme_uri = Some(uri.into());
        self
    }

    /// Set the comma-separated tag list.
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Override the text domain. The value is re-sanitized to key format; an
    /// empty value keeps the default derived from the name.
    pub fn text_domain(mut self, text_domain: impl Into<String>) -> Self {
        self.text_domain = Some(text_domain.into());
        self
    }

    /// Request a single parent theme file to be copied.
    pub fn copy_parent_file(mut self, path: impl Into<String>) -> Self {
        self.copy_parent_files.insert(path.into());
        self
    }

    /// Request several parent theme files to be copied.
    pub fn copy_parent_files<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.copy_parent_files
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Validate all fields and build the request.
    ///
    /// URL fields are normalized, never rejected. Blank input means no URL,
    /// input without a scheme gets `http://` prefixed, and anything that is
    /// then not an http or https URL is dropped with a warning. The accepted
    /// text is kept as entered.
    ///
    /// # Errors
    /// Returns the first `ValidationError` encountered: name too short or
    /// unusable, or a rejected thumbnail
    pub fn build(self) -> Result<ThemeRequest, ValidationError> {
        let name = ThemeName::new(&self.name)?;
        let display_name = sanitize_text_field(&self.name);

        let author_uri = normalize_optional_url("author_uri", self.author_uri.as_deref());
        let theme_uri = normalize_optional_url("theme_uri", self.theme_uri.as_deref());

        let text_domain = match self.text_domain.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => TextDomain::sanitize(value),
            _ => TextDomain::from_name(&name),
        };

        if let Some(thumbnail) = &self.thumbnail {
            thumbnail.validate()?;
        }

        let copy_parent_files = self
            .copy_parent_files
            .into_iter()
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .collect();

        Ok(ThemeRequest {
            display_name,
            name,
            author: sanitize_text_field(self.author.as_deref().unwrap_or_default()),
            author_uri,
            description: sanitize_textarea_field(self.description.as_deref().unwrap_or_default()),
            theme_uri,
            tags: sanitize_text_field(self.tags.as_deref().unwrap_or_default()),
            text_domain,
            copy_parent_files,
            thumbnail: self.thumbnail,
        })
    }
}

fn normalize_optional_url(field: &str, value: Option<&str>) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;

    let candidate = match Url::parse(value) {
        Err(url::ParseError::RelativeUrlWithoutBase) => format!("http://{value}"),
        _ => value.to_string(),
    };

    match Url::parse(&candidate) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(candidate),
        _ => {
            warn!(field, value, "Dropping URL that is not http or https");
            None
        }
    }
}
