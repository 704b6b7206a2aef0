//! Parent theme file listing.
//!
//! Shows which files of a parent theme can be passed to `create --copy`.

use std::path::PathBuf;

use child_theme_core::list_parent_files;
use clap::Args;
use colored::Colorize;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "list_cmd_tests.rs"]
mod list_cmd_tests;

#[derive(Args, Debug, Default, Clone)]
pub struct ListParentFilesArgs {
    /// Directory of the parent theme.
    #[arg(long)]
    pub parent: PathBuf,

    /// How many directory levels to descend (1 lists only the top level).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print the list as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<String>,
}

pub fn execute(args: &ListParentFilesArgs) -> Result<Vec<String>, Error> {
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    let max_depth = args.max_depth.unwrap_or(config.listing.max_depth);
    if max_depth == 0 {
        return Err(Error::InvalidArguments(
            "--max-depth must be at least 1".to_string(),
        ));
    }

    debug!(parent = ?args.parent, max_depth, "Listing parent theme files");
    Ok(list_parent_files(&args.parent, max_depth)?)
}

pub fn run(args: &ListParentFilesArgs) -> Result<(), Error> {
    let files = execute(args)?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&files).map_err(|e| Error::Output(e.to_string()))?;
        println!("{json}");
    } else if files.is_empty() {
        println!("{}", "(no files)".dimmed());
    } else {
        for file in &files {
            println!("{file}");
        }
    }

    Ok(())
}
