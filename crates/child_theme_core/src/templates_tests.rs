use super::*;
use crate::request::ThemeRequestBuilder;

fn parent() -> ParentTheme {
    ParentTheme::new(
        "Twenty Twenty-Four",
        "1.2",
        "twentytwentyfour",
        "/srv/themes/twentytwentyfour",
    )
}

fn request() -> ThemeRequest {
    ThemeRequestBuilder::new("Acme Studio")
        .author("Jane Doe")
        .author_uri("https://example.com/jane")
        .description("A studio theme")
        .theme_uri("https://example.com/acme")
        .tags("blog, two-columns")
        .build()
        .unwrap()
}

#[test]
fn test_style_css_header() {
    let templates = ScaffoldTemplates::new().unwrap();

    let css = templates.style_css(&request(), &parent()).unwrap();

    assert!(css.starts_with("/*\nTheme Name: Acme Studio\n"));
    assert!(css.contains("Template: twentytwentyfour\n"));
    assert!(css.contains("Author: Jane Doe\n"));
    assert!(css.contains("Author URI: https://example.com/jane\n"));
    assert!(css.contains("Description: A studio theme\n"));
    assert!(css.contains("Theme URI: https://example.com/acme\n"));
    assert!(css.contains("Version: 1.0.0\n"));
    assert!(css.contains("Text Domain: acme-studio-child\n"));
    assert!(css.contains("Tags: blog, two-columns\n"));
    assert!(css.contains("Child theme of Twenty Twenty-Four"));
}

#[test]
fn test_style_css_theme_name_keeps_child_word() {
    let templates = ScaffoldTemplates::new().unwrap();
    let request = ThemeRequestBuilder::new("Twenty Twenty-Four Child")
        .build()
        .unwrap();

    let css = templates.style_css(&request, &parent()).unwrap();

    assert!(css.contains("Theme Name: Twenty Twenty-Four Child\n"));
    assert!(css.contains("Text Domain: twenty-twenty-four-child\n"));
}

#[test]
fn test_style_css_urls_are_written_as_entered() {
    let templates = ScaffoldTemplates::new().unwrap();
    let request = ThemeRequestBuilder::new("Acme")
        .author_uri("https://example.com")
        .theme_uri("example.com/acme")
        .build()
        .unwrap();

    let css = templates.style_css(&request, &parent()).unwrap();

    assert!(css.contains("Author URI: https://example.com\n"));
    assert!(css.contains("Theme URI: http://example.com/acme\n"));
}

#[test]
fn test_style_css_optional_fields_render_empty() {
    let templates = ScaffoldTemplates::new().unwrap();
    let request = ThemeRequestBuilder::new("Minimal").build().unwrap();

    let css = templates.style_css(&request, &parent()).unwrap();

    assert!(css.contains("Author: \n"));
    assert!(css.contains("Author URI: \n"));
    assert!(css.contains("Theme URI: \n"));
}

#[test]
fn test_values_are_not_html_escaped() {
    let templates = ScaffoldTemplates::new().unwrap();
    let request = ThemeRequestBuilder::new("Tom & Jerry")
        .author("O'Brien")
        .build()
        .unwrap();

    let css = templates.style_css(&request, &parent()).unwrap();

    assert!(css.contains("Theme Name: Tom & Jerry\n"));
    assert!(css.contains("Author: O'Brien\n"));
}

#[test]
fn test_functions_php_uses_prefix() {
    let templates = ScaffoldTemplates::new().unwrap();

    let php = templates.functions_php(&request(), &parent()).unwrap();

    assert!(php.starts_with("<?php\n"));
    assert!(php.contains("if (!defined('ABSPATH')) {"));
    assert!(php.contains("function acme_studio_child_enqueue_styles() {"));
    assert!(php.contains("add_action('wp_enqueue_scripts', 'acme_studio_child_enqueue_styles');"));
    assert!(php.contains("array('parent-style')"));
    assert!(php.contains("@package acme-studio-child"));
}

#[test]
fn test_functions_php_enqueues_parent_before_child() {
    let templates = ScaffoldTemplates::new().unwrap();

    let php = templates.functions_php(&request(), &parent()).unwrap();

    let parent_pos = php.find("'parent-style',").unwrap();
    let child_pos = php.find("'child-style',").unwrap();
    assert!(parent_pos < child_pos);
}

#[test]
fn test_rendering_is_deterministic() {
    let templates = ScaffoldTemplates::new().unwrap();

    let first = templates.render_all(&request(), &parent()).unwrap();
    let second = templates.render_all(&request(), &parent()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_render_all_order_and_fixed_files() {
    let templates = ScaffoldTemplates::new().unwrap();

    let files = templates.render_all(&request(), &parent()).unwrap();

    let names: Vec<_> = files.iter().map(|f| f.file_name).collect();
    assert_eq!(names, vec![STYLE_CSS, FUNCTIONS_PHP, INDEX_PHP, README_TXT]);
    assert_eq!(files[2].content, "<?php\n// Silence is golden.\n");
    assert_eq!(files[3].content, ScaffoldTemplates::readme_txt());
}

#[test]
fn test_readme_does_not_depend_on_request() {
    let readme = ScaffoldTemplates::readme_txt();

    assert!(!readme.contains("{{"));
    assert!(!readme.contains("Acme"));
}
