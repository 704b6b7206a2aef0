use super::*;
use tempfile::TempDir;
use tracing_test::traced_test;

fn parent() -> ParentTheme {
    ParentTheme::new("Acme", "2.0", "acme", "/srv/themes/acme")
}

#[test]
#[traced_test]
fn test_log_activator_logs_pair() {
    LogActivator.activate("acme-child", &parent()).unwrap();

    assert!(logs_contain("Child theme ready for activation"));
    assert!(logs_contain("acme-child"));
}

#[test]
fn test_active_theme_file_records_pair() {
    let temp_dir = TempDir::new().unwrap();
    let activator = ActiveThemeFile::new(temp_dir.path().join("state/active-theme.toml"));

    activator.activate("acme-child", &parent()).unwrap();

    assert_eq!(
        activator.read().unwrap(),
        Some(ActiveTheme {
            stylesheet: "acme-child".to_string(),
            template: "acme".to_string(),
        })
    );
}

#[test]
fn test_active_theme_file_overwrites_previous_pair() {
    let temp_dir = TempDir::new().unwrap();
    let activator = ActiveThemeFile::new(temp_dir.path().join("active-theme.toml"));

    activator.activate("first-child", &parent()).unwrap();
    activator.activate("second-child", &parent()).unwrap();

    let state = activator.read().unwrap().unwrap();
    assert_eq!(state.stylesheet, "second-child");
}

#[test]
fn test_active_theme_file_read_without_state() {
    let temp_dir = TempDir::new().unwrap();
    let activator = ActiveThemeFile::new(temp_dir.path().join("active-theme.toml"));

    assert_eq!(activator.read().unwrap(), None);
}

#[test]
fn test_active_theme_file_rejects_corrupt_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("active-theme.toml");
    std::fs::write(&path, "stylesheet = ").unwrap();

    let result = ActiveThemeFile::new(&path).read();
    assert!(matches!(result, Err(ScaffoldError::Activation { .. })));
}
