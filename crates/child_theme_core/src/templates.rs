//! Fixed templates for the generated child theme files.
//!
//! Output depends only on the [`ThemeRequest`] and [`ParentTheme`] passed
//! in, so every file can be rendered and checked without touching the
//! filesystem.

use serde_json::json;
use template_engine::{HandlebarsTemplateEngine, TemplateContext, TemplateError};

use crate::errors::{ScaffoldError, ScaffoldResult};
use crate::parent::ParentTheme;
use crate::request::ThemeRequest;

#[cfg(test)]
#[path = "templates_tests.rs"]
mod tests;

pub const STYLE_CSS: &str = "style.css";
pub const FUNCTIONS_PHP: &str = "functions.php";
pub const INDEX_PHP: &str = "index.php";
pub const README_TXT: &str = "readme.txt";

/// Version written into every generated stylesheet header.
pub const CHILD_THEME_VERSION: &str = "1.0.0";

const STYLE_CSS_TEMPLATE: &str = r#"/*
Theme Name: {{name}}
Template: {{parent.slug}}
Author: {{author}}
Author URI: {{author_uri}}
Description: {{description}}
Theme URI: {{theme_uri}}
Version: {{version}}
Text Domain: {{text_domain}}
Tags: {{tags}}
*/

/* ========================================
   Child theme of {{parent.name}}

   Styles in this file load after the parent
   theme's stylesheet, so any rule below
   overrides the parent without editing it.
   ======================================== */

/* ===========================================
   Add your custom styles below this comment.
   The customizer or a page builder works too.
   =========================================== */

"#;

const FUNCTIONS_PHP_TEMPLATE: &str = r#"<?php
/**
 * {{name}} Functions
 *
 * Child theme of {{parent.name}}.
 *
 * @package {{text_domain}}
 */

// Prevent direct access
if (!defined('ABSPATH')) {
    exit;
}

/**
 * Enqueue parent and child theme styles
 */
function {{prefix}}_enqueue_styles() {
    // Parent stylesheet, versioned with the parent theme
    wp_enqueue_style(
        'parent-style',
        get_template_directory_uri() . '/style.css',
        array(),
        wp_get_theme()->parent()->get('Version')
    );

    // Child stylesheet, loaded after the parent
    wp_enqueue_style(
        'child-style',
        get_stylesheet_directory_uri() . '/style.css',
        array('parent-style'),
        wp_get_theme()->get('Version')
    );
}
add_action('wp_enqueue_scripts', '{{prefix}}_enqueue_styles');

/* ===========================================
   Add your custom functions below this line

   Example:

   function {{prefix}}_setup() {
       // Your code here
   }
   add_action('after_setup_theme', '{{prefix}}_setup');

   =========================================== */
"#;

const INDEX_PHP_CONTENT: &str = "<?php\n// Silence is golden.\n";

const README_TXT_CONTENT: &str = "\
Welcome to your child theme.

This directory holds a child theme. It inherits every template,
style and feature of its parent theme and only overrides what you
put here.

  style.css      Theme header and your custom styles
  functions.php  Loads the parent stylesheet, then this one
  index.php      Keeps the directory from being listed

Copy a template file from the parent theme into this directory to
override it. Updates to the parent theme will not touch your changes.

Happy coding!
";

/// A rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: &'static str,
    pub content: String,
}

/// Renderer for the four generated child theme files.
pub struct ScaffoldTemplates {
    engine: HandlebarsTemplateEngine,
}

impl ScaffoldTemplates {
    /// Compiles the stylesheet and bootstrap templates.
    ///
    /// # Errors
    ///
    /// `ScaffoldError::Template` if a template fails to compile.
    pub fn new() -> ScaffoldResult<Self> {
        let mut engine = HandlebarsTemplateEngine::new();

        for (file, template) in [
            (STYLE_CSS, STYLE_CSS_TEMPLATE),
            (FUNCTIONS_PHP, FUNCTIONS_PHP_TEMPLATE),
        ] {
            engine
                .register_template(file, template)
                .map_err(|source| template_error(file, source))?;
        }

        Ok(Self { engine })
    }

    pub fn style_css(&self, request: &ThemeRequest, parent: &ParentTheme) -> ScaffoldResult<String> {
        self.render(STYLE_CSS, request, parent)
    }

    pub fn functions_php(
        &self,
        request: &ThemeRequest,
        parent: &ParentTheme,
    ) -> ScaffoldResult<String> {
        self.render(FUNCTIONS_PHP, request, parent)
    }

    /// Content of `index.php`; blocks directory listings.
    pub fn index_php() -> &'static str {
        INDEX_PHP_CONTENT
    }

    /// Content of `readme.txt`; the same for every theme.
    pub fn readme_txt() -> &'static str {
        README_TXT_CONTENT
    }

    /// Renders all four files in write order.
    pub fn render_all(
        &self,
        request: &ThemeRequest,
        parent: &ParentTheme,
    ) -> ScaffoldResult<Vec<RenderedFile>> {
        Ok(vec![
            RenderedFile {
                file_name: STYLE_CSS,
                content: self.style_css(request, parent)?,
            },
            RenderedFile {
                file_name: FUNCTIONS_PHP,
                content: self.functions_php(request, parent)?,
            },
            RenderedFile {
                file_name: INDEX_PHP,
                content: Self::index_php().to_string(),
            },
            RenderedFile {
                file_name: README_TXT,
                content: Self::readme_txt().to_string(),
            },
        ])
    }

    fn render(
        &self,
        file: &'static str,
        request: &ThemeRequest,
        parent: &ParentTheme,
    ) -> ScaffoldResult<String> {
        self.engine
            .render(file, &template_context(request, parent))
            .map_err(|source| template_error(file, source))
    }
}

fn template_error(file: &'static str, source: TemplateError) -> ScaffoldError {
    ScaffoldError::Template { file, source }
}

fn template_context(request: &ThemeRequest, parent: &ParentTheme) -> TemplateContext {
    TemplateContext::new(json!({
        "name": request.display_name(),
        "author": request.author(),
        "author_uri": request.author_uri().unwrap_or_default(),
        "description": request.description(),
        "theme_uri": request.theme_uri().unwrap_or_default(),
        "version": CHILD_THEME_VERSION,
        "text_domain": request.text_domain().as_str(),
        "tags": request.tags(),
        "prefix": request.text_domain().function_prefix(),
        "parent": {
            "name": parent.name(),
            "slug": parent.stylesheet_slug(),
            "version": parent.version(),
        },
    }))
}
