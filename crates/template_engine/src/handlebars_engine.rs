//! # Handlebars Template Engine
//!
//! Renders the fixed text templates that make up a generated child theme.
//! Templates are plain text (CSS, PHP, prose), so HTML escaping is disabled by
//! default and every referenced variable must be present in the context.
//!
//! ## Examples
//!
//! ```rust
//! # use template_engine::{HandlebarsTemplateEngine, TemplateContext};
//! # use serde_json::json;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = HandlebarsTemplateEngine::new();
//! engine.register_template("style.css", "Theme Name: {{name}}\n")?;
//!
//! let context = TemplateContext::new(json!({ "name": "Acme & Co" }));
//! let rendered = engine.render("style.css", &context)?;
//! assert_eq!(rendered, "Theme Name: Acme & Co\n");
//! # Ok(())
//! # }
//! ```

use handlebars::{Handlebars, RenderError, RenderErrorReason};
use serde_json::Value;
use tracing::debug;

use crate::errors::TemplateError;

#[cfg(test)]
#[path = "handlebars_tests.rs"]
mod tests;

/// Variables available to a template render.
///
/// Variables are stored as a JSON value so that templates can reach nested
/// values such as `{{parent.slug}}`.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    /// All variables available for template rendering.
    pub variables: Value,
}

impl TemplateContext {
    /// Creates a new template context with the provided variables.
    pub fn new(variables: Value) -> Self {
        Self { variables }
    }
}

/// Configuration for template rendering behavior.
#[derive(Debug, Clone)]
pub struct TemplateRenderConfig {
    /// Whether to fail on undefined variables (true) or render them as empty
    /// strings (false).
    ///
    /// **Default**: `true`
    pub strict_variables: bool,

    /// Whether to HTML-escape substituted values.
    ///
    /// **Default**: `false`, since theme files are not HTML documents.
    pub escape_html: bool,

    /// Maximum size of template content in bytes.
    ///
    /// **Default**: 64KB (65,536 bytes)
    pub max_template_size: usize,
}

impl Default for TemplateRenderConfig {
    fn default() -> Self {
        Self {
            strict_variables: true,
            escape_html: false,
            max_template_size: 65_536,
        }
    }
}

/// Handlebars engine holding a registry of named, pre-compiled templates.
pub struct HandlebarsTemplateEngine {
    handlebars: Handlebars<'static>,
    config: TemplateRenderConfig,
}

impl HandlebarsTemplateEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TemplateRenderConfig::default())
    }

    /// Creates an engine with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use template_engine::{HandlebarsTemplateEngine, TemplateContext, TemplateRenderConfig};
    /// use serde_json::json;
    ///
    /// let config = TemplateRenderConfig {
    ///     strict_variables: false,
    ///     ..Default::default()
    /// };
    /// let mut engine = HandlebarsTemplateEngine::with_config(config);
    /// engine.register_template("tags", "Tags: {{tags}}").unwrap();
    ///
    /// let rendered = engine.render("tags", &TemplateContext::new(json!({}))).unwrap();
    /// assert_eq!(rendered, "Tags: ");
    /// ```
    pub fn with_config(config: TemplateRenderConfig) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(config.strict_variables);
        if !config.escape_html {
            handlebars.register_escape_fn(handlebars::no_escape);
        }

        Self { handlebars, config }
    }

    /// Compiles a template and stores it under `name`.
    ///
    /// # Errors
    ///
    /// - `TemplateError::TooLarge` if the template exceeds `max_template_size`
    /// - `TemplateError::Compilation` if the template syntax is invalid
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<(), TemplateError> {
        self.check_size(template)?;

        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| TemplateError::Compilation {
                message: e.to_string(),
            })?;

        debug!(template = name, size = template.len(), "Registered template");
        Ok(())
    }

    /// Renders a previously registered template.
    ///
    /// # Errors
    ///
    /// - `TemplateError::NotRegistered` if no template exists under `name`
    /// - `TemplateError::MissingVariable` if a variable is undefined in strict mode
    /// - `TemplateError::Render` for any other rendering failure
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        if !self.handlebars.has_template(name) {
            return Err(TemplateError::NotRegistered(name.to_string()));
        }

        self.handlebars
            .render(name, &context.variables)
            .map_err(classify_render_error)
    }

    fn check_size(&self, template: &str) -> Result<(), TemplateError> {
        if template.len() > self.config.max_template_size {
            return Err(TemplateError::TooLarge {
                size: template.len(),
                limit: self.config.max_template_size,
            });
        }
        Ok(())
    }
}

impl Default for HandlebarsTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_render_error(error: RenderError) -> TemplateError {
    match error.reason() {
        RenderErrorReason::MissingVariable(variable) => TemplateError::MissingVariable {
            variable: variable.clone().unwrap_or_else(|| "unknown".to_string()),
        },
        RenderErrorReason::TemplateError(e) => TemplateError::Compilation {
            message: e.to_string(),
        },
        RenderErrorReason::TemplateNotFound(name) => TemplateError::NotRegistered(name.clone()),
        _ => TemplateError::Render {
            message: error.to_string(),
        },
    }
}
