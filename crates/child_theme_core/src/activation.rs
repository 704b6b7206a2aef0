//! Switching the host to a newly generated child theme.
//!
//! Activation is the last step of a scaffold build and the only one that
//! reaches outside the theme directory. It sits behind [`ThemeActivator`]
//! so embedders can plug in their own host call.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::parent::ParentTheme;

#[cfg(test)]
#[path = "activation_tests.rs"]
mod tests;

/// Makes a child theme the active theme of the host.
pub trait ThemeActivator {
    /// Activate the child theme `slug`, which extends `parent`.
    ///
    /// # Errors
    ///
    /// `ScaffoldError::Activation` or `ScaffoldError::Io` if the host could
    /// not be switched.
    fn activate(&self, slug: &str, parent: &ParentTheme) -> ScaffoldResult<()>;
}

/// Activator that only records the request in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogActivator;

impl ThemeActivator for LogActivator {
    fn activate(&self, slug: &str, parent: &ParentTheme) -> ScaffoldResult<()> {
        info!(
            stylesheet = %slug,
            template = %parent.stylesheet_slug(),
            "Child theme ready for activation"
        );
        Ok(())
    }
}

/// The active stylesheet and template pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTheme {
    /// Directory name of the active (child) theme.
    pub stylesheet: String,
    /// Directory name of the theme providing templates (the parent).
    pub template: String,
}

/// Activator that persists the active theme to a TOML state file.
#[derive(Debug, Clone)]
pub struct ActiveThemeFile {
    path: PathBuf,
}

impl ActiveThemeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the currently recorded theme, `None` if nothing was recorded yet.
    pub fn read(&self) -> ScaffoldResult<Option<ActiveTheme>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ScaffoldError::io("read", &self.path, e))?;

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ScaffoldError::Activation {
                slug: String::new(),
                reason: format!("invalid state file {}: {e}", self.path.display()),
            })
    }
}

impl ThemeActivator for ActiveThemeFile {
    fn activate(&self, slug: &str, parent: &ParentTheme) -> ScaffoldResult<()> {
        let state = ActiveTheme {
            stylesheet: slug.to_string(),
            template: parent.stylesheet_slug().to_string(),
        };

        let content = toml::to_string(&state).map_err(|e| ScaffoldError::Activation {
            slug: slug.to_string(),
            reason: e.to_string(),
        })?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| ScaffoldError::io("create directory", dir, e))?;
        }

        fs::write(&self.path, content).map_err(|e| ScaffoldError::io("write", &self.path, e))?;

        info!(
            stylesheet = %state.stylesheet,
            template = %state.template,
            state_file = ?self.path,
            "Activated child theme"
        );
        Ok(())
    }
}
