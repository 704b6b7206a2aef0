//! End-to-end tests for child theme generation against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use child_theme_core::{
    ActiveThemeFile, FileKind, ParentTheme, ScaffoldBuilder, ScaffoldError, ThemeRequestBuilder,
    Thumbnail, ValidationError, MAX_THUMBNAIL_BYTES,
};
use tempfile::TempDir;

fn install_parent(theme_root: &Path) -> PathBuf {
    let dir = theme_root.join("twentytwentyfour");
    fs::create_dir_all(dir.join("parts")).unwrap();
    fs::create_dir_all(dir.join("node_modules/lib")).unwrap();
    fs::write(
        dir.join("style.css"),
        "/*\nTheme Name: Twenty Twenty-Four\nVersion: 1.2\nText Domain: twentytwentyfour\n*/\n",
    )
    .unwrap();
    fs::write(dir.join("header.php"), "<?php get_header();").unwrap();
    fs::write(dir.join("parts/footer.html"), "<footer></footer>").unwrap();
    fs::write(dir.join("node_modules/lib/index.js"), "").unwrap();
    dir
}

#[test]
fn test_full_scaffold_with_activation() {
    let temp_dir = TempDir::new().unwrap();
    let theme_root = temp_dir.path().join("themes");
    let parent = ParentTheme::load(install_parent(&theme_root)).unwrap();
    let state_file = temp_dir.path().join("active-theme.toml");

    assert_eq!(
        parent.list_files().unwrap(),
        vec!["header.php", "parts/footer.html", "style.css"]
    );

    let request = ThemeRequestBuilder::new("Théme Studio")
        .author("Jane <b>Doe</b>")
        .author_uri("https://example.com/jane")
        .description("Line one\nLine two")
        .tags("blog, one-column")
        .thumbnail(Thumbnail::new("shot.jpeg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]))
        .copy_parent_files(["header.php", "parts/footer.html", "missing.php", "../secret"])
        .build()
        .unwrap();

    let scaffold = ScaffoldBuilder::new(&theme_root)
        .with_activator(ActiveThemeFile::new(&state_file))
        .build(request, &parent)
        .unwrap();

    assert_eq!(scaffold.slug, "th-me-studio-child");
    assert_eq!(scaffold.files_of_kind(FileKind::Template).count(), 4);
    assert_eq!(scaffold.files_of_kind(FileKind::Screenshot).count(), 1);
    assert_eq!(scaffold.files_of_kind(FileKind::ParentCopy).count(), 2);
    assert_eq!(scaffold.skipped_parent_files, vec!["../secret", "missing.php"]);

    let css = fs::read_to_string(scaffold.directory.join("style.css")).unwrap();
    assert!(css.contains("Theme Name: Théme Studio\n"));
    assert!(css.contains("Template: twentytwentyfour\n"));
    assert!(css.contains("Author: Jane Doe\n"));
    assert!(css.contains("Text Domain: th-me-studio-child\n"));

    let php = fs::read_to_string(scaffold.directory.join("functions.php")).unwrap();
    assert!(php.contains("function th_me_studio_child_enqueue_styles()"));

    assert!(scaffold.directory.join("screenshot.jpeg").is_file());
    assert!(scaffold.directory.join("parts/footer.html").is_file());
    assert!(!theme_root.join("secret").exists());

    let active = ActiveThemeFile::new(&state_file).read().unwrap().unwrap();
    assert_eq!(active.stylesheet, "th-me-studio-child");
    assert_eq!(active.template, "twentytwentyfour");
}

#[test]
fn test_rejected_thumbnails_create_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let theme_root = temp_dir.path().join("themes");
    install_parent(&theme_root);

    let oversized = ThemeRequestBuilder::new("Studio")
        .thumbnail(Thumbnail::new(
            "big.jpg",
            "image/jpeg",
            vec![0; 3 * 1024 * 1024],
        ))
        .build();
    assert!(matches!(
        oversized,
        Err(ValidationError::TooLarge { max, .. }) if max == MAX_THUMBNAIL_BYTES
    ));

    let pdf = ThemeRequestBuilder::new("Studio")
        .thumbnail(Thumbnail::new("doc.pdf", "application/pdf", vec![0; 1024 * 1024]))
        .build();
    assert!(matches!(pdf, Err(ValidationError::InvalidFormat { .. })));

    assert!(!theme_root.join("studio-child").exists());
}

#[test]
fn test_rebuild_reports_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let theme_root = temp_dir.path().join("themes");
    let parent = ParentTheme::load(install_parent(&theme_root)).unwrap();
    let builder = ScaffoldBuilder::new(&theme_root);

    let first = builder
        .build(ThemeRequestBuilder::new("Studio").build().unwrap(), &parent)
        .unwrap();
    let second = builder.build(ThemeRequestBuilder::new("Studio").build().unwrap(), &parent);

    assert!(matches!(second, Err(ScaffoldError::AlreadyExists { .. })));
    assert!(first.directory.join("style.css").is_file());
}
