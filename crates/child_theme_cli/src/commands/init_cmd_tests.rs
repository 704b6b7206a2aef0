use super::*;
use std::fs;
use tempfile::TempDir;

fn args_for(path: &std::path::Path, force: bool) -> InitArgs {
    InitArgs {
        config: Some(path.to_string_lossy().into_owned()),
        force,
    }
}

#[test]
fn test_init_writes_loadable_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("child-theme.toml");

    let written = execute(&args_for(&path, false)).unwrap();

    assert_eq!(written, path);
    assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("child-theme.toml");
    fs::write(&path, "theme_root = \"/keep\"\n").unwrap();

    let result = execute(&args_for(&path, false));

    assert!(matches!(result, Err(Error::Config(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "theme_root = \"/keep\"\n");
}

#[test]
fn test_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("child-theme.toml");
    fs::write(&path, "theme_root = \"/old\"\n").unwrap();

    execute(&args_for(&path, true)).unwrap();

    assert!(AppConfig::load(&path).unwrap().theme_root.is_none());
}
