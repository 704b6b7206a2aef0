//! Text domain and function prefix derivation.
//!
//! The text domain is the localization key written into `style.css` and the
//! `@package` tag of `functions.php`. The function prefix is derived from it
//! and namespaces the PHP functions of the generated bootstrap file so that
//! several generated child themes never declare the same symbol.

use serde::{Deserialize, Serialize};

use crate::theme_name::ThemeName;

#[cfg(test)]
#[path = "text_domain_tests.rs"]
mod tests;

/// Identifier substituted when sanitization leaves nothing usable.
pub const FALLBACK_IDENTIFIER: &str = "child_theme";

/// Localization key of a child theme, in key format.
///
/// A text domain only contains lowercase ASCII letters, digits, underscores
/// and hyphens, starts with a letter, and never ends with a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDomain(String);

impl TextDomain {
    /// Sanitizes arbitrary input into key format.
    ///
    /// The input is lowercased, every run of characters outside
    /// `[a-z0-9_-]` becomes a single underscore, and every leading character
    /// that is not a letter is removed, underscores included. Trailing
    /// separators are then trimmed. An empty result is replaced by
    /// [`FALLBACK_IDENTIFIER`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use child_theme_core::TextDomain;
    ///
    /// assert_eq!(TextDomain::sanitize("Théme_2024").as_str(), "th_me_2024");
    /// assert_eq!(TextDomain::sanitize("my-theme-child").as_str(), "my-theme-child");
    /// assert_eq!(TextDomain::sanitize("$$$").as_str(), "child_theme");
    /// ```
    pub fn sanitize(value: &str) -> Self {
        let mut key = String::with_capacity(value.len());
        let mut in_invalid_run = false;

        for c in value.chars().flat_map(char::to_lowercase) {
            if is_key_char(c) {
                if in_invalid_run {
                    key.push('_');
                }
                in_invalid_run = false;
                key.push(c);
            } else {
                in_invalid_run = true;
            }
        }

        let key = key
            .trim_start_matches(|c: char| !c.is_ascii_lowercase())
            .trim_end_matches(['_', '-']);

        if key.is_empty() {
            Self(FALLBACK_IDENTIFIER.to_string())
        } else {
            Self(key.to_string())
        }
    }

    /// Default text domain for a theme name: `<slug>-child`.
    pub fn from_name(name: &ThemeName) -> Self {
        Self::sanitize(&name.directory_name())
    }

    /// Get the text domain as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PHP function prefix derived from this text domain.
    pub fn function_prefix(&self) -> String {
        function_prefix(&self.0)
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

/// Derives a PHP identifier prefix from a text domain.
///
/// Every character outside `[A-Za-z0-9_]` becomes an underscore, leading
/// digits are removed and leading/trailing underscores trimmed. If the result
/// is empty or still not a valid identifier, [`FALLBACK_IDENTIFIER`] is
/// returned.
///
/// # Examples
///
/// ```rust
/// use child_theme_core::function_prefix;
///
/// assert_eq!(function_prefix("my-theme-child"), "my_theme_child");
/// assert_eq!(function_prefix("123-$$$"), "child_theme");
/// ```
pub fn function_prefix(text_domain: &str) -> String {
    let replaced: String = text_domain
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let prefix = replaced
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_matches('_');

    if is_identifier(prefix) {
        prefix.to_string()
    } else {
        FALLBACK_IDENTIFIER.to_string()
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl std::fmt::Display for TextDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TextDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
