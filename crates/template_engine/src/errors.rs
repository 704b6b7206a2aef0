use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while registering or rendering templates.
///
/// The engine renders a small, fixed set of theme templates, so most of these
/// indicate a programming error in a template rather than bad user input. The
/// exception is [`TemplateError::MissingVariable`], which is returned when a
/// caller forgets to supply a value the template references.
///
/// # Examples
///
/// ```rust
/// use template_engine::{HandlebarsTemplateEngine, TemplateContext, TemplateError};
/// use serde_json::json;
///
/// let mut engine = HandlebarsTemplateEngine::new();
/// engine.register_template("greeting", "Hello {{name}}").unwrap();
/// let context = TemplateContext::new(json!({}));
///
/// match engine.render("greeting", &context) {
///     Err(TemplateError::MissingVariable { variable }) => eprintln!("missing: {variable}"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Template compilation failed due to syntax errors.
    ///
    /// Returned when a template is registered or rendered and contains
    /// invalid Handlebars syntax, such as an unclosed block.
    #[error("Template compilation failed: {message}")]
    Compilation {
        /// Detailed error message from the Handlebars parser
        message: String,
    },

    /// A variable referenced by the template was not present in the context.
    ///
    /// Only raised in strict mode, which is the default.
    #[error("Template variable missing: {variable}")]
    MissingVariable {
        /// The name of the missing variable, or `unknown` when Handlebars
        /// could not report it
        variable: String,
    },

    /// No template has been registered under the requested name.
    #[error("Template not registered: {0}")]
    NotRegistered(String),

    /// Template rendering failed for a reason other than a missing variable.
    #[error("Template rendering failed: {message}")]
    Render {
        /// Detailed error message from the Handlebars renderer
        message: String,
    },

    /// Template content exceeds the configured size limit.
    #[error("Template size {size} bytes exceeds limit of {limit} bytes")]
    TooLarge {
        /// Size of the rejected template in bytes
        size: usize,
        /// Configured maximum size in bytes
        limit: usize,
    },
}
