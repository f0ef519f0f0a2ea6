//! CLI module
//!
//! Command-line interface for paginating JSON arrays.
//!
//! # Commands
//!
//! - `page` - Print one page of a JSON array file
//! - `pages` - Print every page, one JSON document per line
//! - `info` - Print page metadata for a total item count

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
