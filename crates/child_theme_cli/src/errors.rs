use std::io;
use std::path::PathBuf;

use child_theme_core::{ScaffoldError, ValidationError};
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Exit code for scaffold and validation failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for configuration and argument failures.
pub const EXIT_USAGE: i32 = 2;

/// Errors that can occur in the child theme CLI application.
///
/// This enum represents all possible error conditions that can arise during
/// CLI operations, from configuration problems to failures while generating
/// the child theme itself.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// Returned when the configuration file is missing, unreadable or does
    /// not match the expected structure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failed to load a file named on the command line, such as a thumbnail.
    #[error("Failed to load file {}: {source}", path.display())]
    LoadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The theme metadata was rejected.
    #[error("Invalid theme details: {0}")]
    Validation(#[from] ValidationError),

    /// Generating the child theme failed.
    #[error("{0}")]
    Scaffold(#[from] ScaffoldError),

    /// Command output could not be produced.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArguments(_) | Self::LoadFile { .. } => EXIT_USAGE,
            Self::Validation(_) | Self::Scaffold(_) | Self::Output(_) => EXIT_FAILURE,
        }
    }
}
