//! Tests for the Handlebars template engine.

use super::*;
use serde_json::json;

fn render_once(
    engine: &mut HandlebarsTemplateEngine,
    template: &str,
    context: &TemplateContext,
) -> Result<String, TemplateError> {
    engine.register_template("inline", template)?;
    engine.render("inline", context)
}

// ================================
// Template Context Tests
// ================================

#[test]
fn test_template_context_new() {
    let variables = json!({
        "name": "Acme",
        "parent": {"slug": "twentytwentyfour", "version": "1.2"}
    });

    let context = TemplateContext::new(variables.clone());
    assert_eq!(context.variables, variables);
}

// ================================
// Engine Creation Tests
// ================================

#[test]
fn test_render_config_defaults() {
    let config = TemplateRenderConfig::default();

    assert!(config.strict_variables);
    assert!(!config.escape_html);
    assert_eq!(config.max_template_size, 65_536);
}

// ================================
// Rendering Tests
// ================================

#[test]
fn test_render_registered_template() {
    let mut engine = HandlebarsTemplateEngine::new();
    engine
        .register_template("header", "Theme Name: {{name}}\nTemplate: {{parent.slug}}\n")
        .expect("template should compile");

    let context = TemplateContext::new(json!({
        "name": "Acme",
        "parent": {"slug": "twentytwentyfour"}
    }));

    let rendered = engine.render("header", &context).expect("render should succeed");
    assert_eq!(rendered, "Theme Name: Acme\nTemplate: twentytwentyfour\n");
}

#[test]
fn test_render_does_not_escape_html_by_default() {
    let mut engine = HandlebarsTemplateEngine::new();
    let context = TemplateContext::new(json!({"author": "O'Brien & <Sons>"}));

    let rendered =
        render_once(&mut engine, "Author: {{author}}", &context).expect("render should succeed");
    assert_eq!(rendered, "Author: O'Brien & <Sons>");
}

#[test]
fn test_render_escapes_html_when_enabled() {
    let mut engine = HandlebarsTemplateEngine::with_config(TemplateRenderConfig {
        escape_html: true,
        ..Default::default()
    });
    let context = TemplateContext::new(json!({"author": "<b>"}));

    let rendered = render_once(&mut engine, "{{author}}", &context).expect("render should succeed");
    assert_eq!(rendered, "&lt;b&gt;");
}

#[test]
fn test_render_leaves_php_braces_alone() {
    let mut engine = HandlebarsTemplateEngine::new();
    let context = TemplateContext::new(json!({"prefix": "acme_child"}));

    let template = "function {{prefix}}_enqueue_styles() {\n    return;\n}\n";
    let rendered = render_once(&mut engine, template, &context).expect("render should succeed");
    assert_eq!(
        rendered,
        "function acme_child_enqueue_styles() {\n    return;\n}\n"
    );
}

#[test]
fn test_substituted_values_are_not_re_rendered() {
    let mut engine = HandlebarsTemplateEngine::new();
    let context = TemplateContext::new(json!({"name": "{{other}}"}));

    let rendered = render_once(&mut engine, "{{name}}", &context).expect("render should succeed");
    assert_eq!(rendered, "{{other}}");
}

// ================================
// Error Handling Tests
// ================================

#[test]
fn test_render_unregistered_template() {
    let engine = HandlebarsTemplateEngine::new();
    let context = TemplateContext::new(json!({}));

    let result = engine.render("missing.css", &context);
    assert!(matches!(result, Err(TemplateError::NotRegistered(name)) if name == "missing.css"));
}

#[test]
fn test_register_invalid_syntax() {
    let mut engine = HandlebarsTemplateEngine::new();

    let result = engine.register_template("broken", "{{#if name}}unclosed");
    assert!(matches!(result, Err(TemplateError::Compilation { .. })));

    let rendered = engine.render("broken", &TemplateContext::new(json!({"name": "Acme"})));
    assert!(matches!(rendered, Err(TemplateError::NotRegistered(_))));
}

#[test]
fn test_render_missing_variable_strict() {
    let mut engine = HandlebarsTemplateEngine::new();
    let context = TemplateContext::new(json!({"name": "Acme"}));

    let result = render_once(&mut engine, "{{name}} by {{author}}", &context);
    assert!(matches!(result, Err(TemplateError::MissingVariable { .. })));
}

#[test]
fn test_render_missing_variable_non_strict() {
    let mut engine = HandlebarsTemplateEngine::with_config(TemplateRenderConfig {
        strict_variables: false,
        ..Default::default()
    });
    let context = TemplateContext::new(json!({"name": "Acme"}));

    let rendered =
        render_once(&mut engine, "{{name}} by {{author}}", &context).expect("render should succeed");
    assert_eq!(rendered, "Acme by ");
}

#[test]
fn test_template_size_limit() {
    let mut engine = HandlebarsTemplateEngine::with_config(TemplateRenderConfig {
        max_template_size: 16,
        ..Default::default()
    });

    let result = engine.register_template("big", &"x".repeat(17));
    assert!(matches!(
        result,
        Err(TemplateError::TooLarge { size: 17, limit: 16 })
    ));

    assert!(engine.register_template("small", &"x".repeat(16)).is_ok());
}
