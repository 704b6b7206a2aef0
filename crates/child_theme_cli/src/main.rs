use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use child_theme_cli::commands::{
    create_cmd::{self, CreateArgs},
    init_cmd::{self, InitArgs},
    list_cmd::{self, ListParentFilesArgs},
};
use child_theme_cli::errors::Error;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Child theme CLI: Generate child themes that extend an installed parent theme
#[derive(Parser)]
#[command(name = "child-theme")]
#[command(about = "Generate child themes that extend an installed parent theme", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new child theme from a parent theme
    Create(CreateArgs),

    /// List the files of a parent theme that can be copied
    ListParentFiles(ListParentFilesArgs),

    /// Write a default configuration file
    Init(InitArgs),

    /// Show the CLI version
    Version,
}

fn run(command: &Commands) -> Result<(), Error> {
    match command {
        Commands::Create(args) => create_cmd::run(args),
        Commands::ListParentFiles(args) => list_cmd::run(args),
        Commands::Init(args) => init_cmd::run(args),
        Commands::Version => {
            // Print version info from baked-in value
            println!(
                "child-theme version {}",
                option_env!("CHILD_THEME_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            );
            Ok(())
        }
    }
}

fn main() {
    // Logs go to stderr, stdout carries command output
    tracing_subscriber::registry()
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("CHILD_THEME_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli.command) {
        error!("Error: {e}");
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(e.exit_code());
    }
}
