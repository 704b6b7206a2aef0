//! Child theme creation command module.
//!
//! This module handles the creation of new child themes. It loads the
//! parent theme from disk, merges command line arguments with configuration
//! defaults, and delegates to [`ScaffoldBuilder`] for the actual generation.
//!
//! ## Features
//!
//! - Configuration file support (TOML format)
//! - Metadata defaults derived from the parent theme
//! - Thumbnail upload with MIME detection from the file extension
//! - Copying selected files from the parent theme
//! - Human readable or JSON output

use std::fs;
use std::path::{Path, PathBuf};

use child_theme_core::{
    ActiveThemeFile, FileKind, GeneratedScaffold, ParentTheme, ScaffoldBuilder, ThemeRequest,
    ThemeRequestBuilder, Thumbnail,
};
use clap::Args;
use colored::Colorize;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "create_cmd_tests.rs"]
mod create_cmd_tests;

/// Command-line arguments for the create command.
///
/// Arguments provided via CLI override any corresponding values from the
/// configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct CreateArgs {
    /// Directory of the parent theme to extend.
    #[arg(long)]
    pub parent: PathBuf,

    /// Directory to create the child theme in.
    ///
    /// Defaults to the configured theme root, then to the directory that
    /// contains the parent theme.
    #[arg(long)]
    pub theme_root: Option<PathBuf>,

    /// Name of the child theme. Defaults to "<parent name> Child".
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub author_uri: Option<String>,

    /// Description. Defaults to "Child theme of <parent name>".
    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub theme_uri: Option<String>,

    /// Text domain override; derived from the name when absent.
    #[arg(long)]
    pub text_domain: Option<String>,

    /// Comma-separated list of theme tags.
    #[arg(long)]
    pub tags: Option<String>,

    /// Image to use as the theme screenshot (JPG, PNG or GIF, up to 2 MiB).
    #[arg(long)]
    pub thumbnail: Option<PathBuf>,

    /// MIME type of the thumbnail. Guessed from the file extension when absent.
    #[arg(long, requires = "thumbnail")]
    pub thumbnail_mime: Option<String>,

    /// Parent theme file to copy into the child theme; may be repeated.
    #[arg(long = "copy", value_name = "PATH")]
    pub copy: Vec<String>,

    /// Do not activate the new child theme.
    #[arg(long)]
    pub no_activate: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<String>,
}

/// Merges arguments, configuration and parent defaults into a request.
///
/// # Errors
///
/// `Error::LoadFile` if the thumbnail cannot be read, `Error::Validation` if
/// the merged values are rejected.
pub fn build_request(
    args: &CreateArgs,
    config: &AppConfig,
    parent: &ParentTheme,
) -> Result<ThemeRequest, Error> {
    let defaults = &config.defaults;

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| format!("{} Child", parent.name()));
    let description = args
        .description
        .clone()
        .unwrap_or_else(|| format!("Child theme of {}", parent.name()));

    let mut builder = ThemeRequestBuilder::new(name)
        .description(description)
        .copy_parent_files(args.copy.iter().cloned());

    if let Some(author) = args.author.as_ref().or(defaults.author.as_ref()) {
        builder = builder.author(author);
    }
    if let Some(uri) = args.author_uri.as_ref().or(defaults.author_uri.as_ref()) {
        builder = builder.author_uri(uri);
    }
    if let Some(uri) = args.theme_uri.as_ref().or(defaults.theme_uri.as_ref()) {
        builder = builder.theme_uri(uri);
    }
    if let Some(tags) = args.tags.as_ref().or(defaults.tags.as_ref()) {
        builder = builder.tags(tags);
    }
    if let Some(text_domain) = &args.text_domain {
        builder = builder.text_domain(text_domain);
    }
    if let Some(path) = &args.thumbnail {
        builder = builder.thumbnail(load_thumbnail(path, args.thumbnail_mime.as_deref())?);
    }

    Ok(builder.build()?)
}

/// Reads a thumbnail from disk.
///
/// The MIME type is `mime` when given, otherwise it is guessed from the file
/// extension. Type and size are checked when the request is built.
pub fn load_thumbnail(path: &Path, mime: Option<&str>) -> Result<Thumbnail, Error> {
    let bytes = fs::read(path).map_err(|source| Error::LoadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mime_type = match mime {
        Some(mime) => mime.to_string(),
        None => mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(file = %file_name, mime = %mime_type, size = bytes.len(), "Loaded thumbnail");
    Ok(Thumbnail::new(file_name, mime_type, bytes))
}

/// Theme root for the new child theme.
///
/// The argument wins over the configuration; without either the directory
/// containing the parent theme is used.
pub fn resolve_theme_root(args: &CreateArgs, config: &AppConfig, parent: &ParentTheme) -> PathBuf {
    args.theme_root
        .clone()
        .or_else(|| config.theme_root.clone())
        .or_else(|| parent.root_directory().parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Creates the child theme described by `args`.
pub fn execute(args: &CreateArgs) -> Result<GeneratedScaffold, Error> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    let parent = ParentTheme::load(&args.parent)?;
    let request = build_request(args, &config, &parent)?;
    let theme_root = resolve_theme_root(args, &config, &parent);

    info!(
        parent = %parent.stylesheet_slug(),
        theme_root = ?theme_root,
        "Creating child theme"
    );

    let mut builder = ScaffoldBuilder::new(theme_root);
    if config.activation.enabled && !args.no_activate {
        builder = builder.with_activator(ActiveThemeFile::new(&config.activation.state_file));
    } else {
        debug!("Activation disabled");
    }

    Ok(builder.build(request, &parent)?)
}

/// Runs the create command and prints its result.
pub fn run(args: &CreateArgs) -> Result<(), Error> {
    let scaffold = execute(args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&scaffold)
            .map_err(|e| Error::Output(e.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", format_summary(&scaffold));
    }

    Ok(())
}

/// Human readable summary of a generated scaffold.
pub fn format_summary(scaffold: &GeneratedScaffold) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        "✓ Child theme created:".green().bold(),
        scaffold.slug.bold()
    ));
    output.push_str(&format!(
        "{}: {}\n\n",
        "Directory".bold(),
        scaffold.directory.display()
    ));

    output.push_str(&format!("{}\n", "Files:".bold()));
    for file in &scaffold.files {
        let kind = match file.kind {
            FileKind::Template => "generated",
            FileKind::Screenshot => "screenshot",
            FileKind::ParentCopy => "from parent",
        };
        output.push_str(&format!(
            "  {} {} {}\n",
            "✓".green(),
            file.relative_path,
            format!("({kind}, {} bytes)", file.size).dimmed()
        ));
    }

    if !scaffold.skipped_parent_files.is_empty() {
        output.push_str(&format!("\n{}\n", "Skipped parent files:".yellow().bold()));
        for skipped in &scaffold.skipped_parent_files {
            output.push_str(&format!("  {} {}\n", "⚠".yellow(), skipped));
        }
    }

    output
}
