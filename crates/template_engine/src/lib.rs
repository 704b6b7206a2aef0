//! Template Engine for the child theme scaffolder
//!
//! This crate compiles and renders the fixed text templates (stylesheet header,
//! bootstrap file, readme) that are written into a generated child theme.

mod errors;
mod handlebars_engine;

pub use errors::TemplateError;
pub use handlebars_engine::{HandlebarsTemplateEngine, TemplateContext, TemplateRenderConfig};
