//! Configuration file initialization.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::config::{get_config_path, AppConfig};
use crate::errors::Error;

#[cfg(test)]
#[path = "init_cmd_tests.rs"]
mod init_cmd_tests;

#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Where to write the configuration file. Defaults to
    /// `child-theme.toml` in the current directory.
    #[arg(long)]
    pub config: Option<String>,

    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

/// Writes the default configuration and returns its path.
///
/// # Errors
///
/// `Error::Config` if the file already exists and `force` is not set, or if
/// it cannot be written.
pub fn execute(args: &InitArgs) -> Result<PathBuf, Error> {
    let path = get_config_path(args.config.as_deref());

    if path.exists() && !args.force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {:?} (use --force to overwrite)",
            path
        )));
    }

    AppConfig::default().save(&path)?;
    Ok(path)
}

pub fn run(args: &InitArgs) -> Result<(), Error> {
    let path = execute(args)?;
    println!(
        "{} {}",
        "✓ Configuration written to".green(),
        path.display()
    );
    Ok(())
}
