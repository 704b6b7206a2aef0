//! Theme name and slug handling.
//!
//! The child theme's display name arrives as free text from a form or the
//! command line. It is cleaned the way a host sanitizes a text field, the word
//! "child" is removed (the generated directory always gets a `-child` suffix),
//! and the result is turned into a filesystem-safe slug.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "theme_name_tests.rs"]
mod tests;

/// Minimum number of characters a theme name must keep after sanitization.
pub const MIN_NAME_LENGTH: usize = 2;

/// Suffix appended to the slug to form the child theme directory name.
pub const CHILD_SUFFIX: &str = "-child";

static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static CHILD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*child\s*").expect("child pattern is valid"));

/// Cleans a single-line text field.
///
/// HTML tags and control characters are removed, every whitespace run
/// (including line breaks and tabs) becomes a single space, and the result is
/// trimmed.
pub fn sanitize_text_field(value: &str) -> String {
    let without_tags = TAGS.replace_all(value, "");
    collapse_whitespace(&without_tags)
}

/// Cleans a multi-line text field.
///
/// Works like [`sanitize_text_field`] but keeps line breaks; each line is
/// collapsed and trimmed on its own.
pub fn sanitize_textarea_field(value: &str) -> String {
    let without_tags = TAGS.replace_all(value, "");
    let lines: Vec<String> = without_tags
        .replace("\r\n", "\n")
        .split('\n')
        .map(collapse_whitespace)
        .collect();

    lines.join("\n").trim().to_string()
}

fn collapse_whitespace(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts text into a slug.
///
/// The text is lowercased, every run of characters outside `[a-z0-9]` is
/// replaced by a single hyphen, and leading/trailing hyphens are trimmed. The
/// result may be empty.
///
/// # Examples
///
/// ```rust
/// use child_theme_core::slugify;
///
/// assert_eq!(slugify("My Theme!! 2.0"), "my-theme-2-0");
/// assert_eq!(slugify("--Acme--"), "acme");
/// ```
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Validated base name of a child theme, used to derive its slug.
///
/// # Validation Rules
/// - Text-field sanitization (tags, control characters, extra whitespace removed)
/// - Every occurrence of "child" (case-insensitive) removed together with its
///   surrounding whitespace
/// - At least [`MIN_NAME_LENGTH`] characters remain
/// - The slug derived from the name is not empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeName(String);

impl ThemeName {
    /// Create a new theme name with validation
    ///
    /// # Errors
    /// Returns `ValidationError` if validation fails
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let sanitized = sanitize_text_field(name.as_ref());
        let stripped = CHILD_WORD.replace_all(&sanitized, "").trim().to_string();

        let length = stripped.chars().count();
        if length == 0 {
            return Err(ValidationError::empty_field("name"));
        }

        if length < MIN_NAME_LENGTH {
            return Err(ValidationError::too_short("name", length, MIN_NAME_LENGTH));
        }

        if slugify(&stripped).is_empty() {
            return Err(ValidationError::invalid_format(
                "name",
                "must contain at least one ASCII letter or digit",
            ));
        }

        Ok(Self(stripped))
    }

    /// Get the theme name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Slug of the name, without the child suffix.
    pub fn slug(&self) -> String {
        slugify(&self.0)
    }

    /// Directory name of the child theme: `<slug>-child`.
    pub fn directory_name(&self) -> String {
        format!("{}{}", self.slug(), CHILD_SUFFIX)
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ThemeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
