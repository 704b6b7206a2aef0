//! Command modules for the child theme CLI.
//!
//! - `create_cmd`: generate a child theme from a parent theme directory
//! - `init_cmd`: write a default configuration file
//! - `list_cmd`: list the files of a parent theme that can be copied

pub mod create_cmd;
pub mod init_cmd;
pub mod list_cmd;
