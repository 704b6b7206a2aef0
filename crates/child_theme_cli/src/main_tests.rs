use super::*;
use clap::CommandFactory;
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_create_with_repeated_copy() {
    let cli = Cli::try_parse_from([
        "child-theme",
        "create",
        "--parent",
        "/srv/themes/acme",
        "--name",
        "Studio",
        "--copy",
        "header.php",
        "--copy",
        "footer.php",
        "--no-activate",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Create(args) => {
            assert_eq!(args.parent, PathBuf::from("/srv/themes/acme"));
            assert_eq!(args.name.as_deref(), Some("Studio"));
            assert_eq!(args.copy, vec!["header.php", "footer.php"]);
            assert!(args.no_activate);
            assert!(args.json);
        }
        _ => panic!("Expected create command"),
    }
}

#[test]
fn test_create_requires_parent() {
    let result = Cli::try_parse_from(["child-theme", "create", "--name", "Studio"]);
    assert!(result.is_err());
}

#[test]
fn test_thumbnail_mime_requires_thumbnail() {
    let result = Cli::try_parse_from([
        "child-theme",
        "create",
        "--parent",
        "/srv/themes/acme",
        "--thumbnail-mime",
        "image/png",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_list_parent_files() {
    let cli = Cli::try_parse_from([
        "child-theme",
        "list-parent-files",
        "--parent",
        "/srv/themes/acme",
        "--max-depth",
        "3",
    ])
    .unwrap();

    match cli.command {
        Commands::ListParentFiles(args) => {
            assert_eq!(args.max_depth, Some(3));
            assert!(!args.json);
        }
        _ => panic!("Expected list-parent-files command"),
    }
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["child-theme", "version"]).unwrap();
    assert!(matches!(cli.command, Commands::Version));
}
