//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginate JSON arrays from the command line
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page request file (JSON or YAML) with default page and page size
    #[arg(short, long, global = true)]
    pub request: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level requested on the command line
    pub fn log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => LogLevel::Debug,
            (None, false) => LogLevel::Info,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of a JSON array file
    Page {
        /// JSON file containing an array of items
        #[arg(short, long)]
        input: PathBuf,

        /// Page number (1-based, values below 1 select the first page)
        #[arg(short, long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Items per page (values below 1 use the default of 10)
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Print every page of a JSON array file, one document per line
    Pages {
        /// JSON file containing an array of items
        #[arg(short, long)]
        input: PathBuf,

        /// Items per page (values below 1 use the default of 10)
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },

    /// Print page metadata for a total item count
    Info {
        /// Total number of items
        #[arg(short, long)]
        total: u64,

        /// Page number (1-based, values below 1 select the first page)
        #[arg(short, long, allow_negative_numbers = true)]
        page: Option<i64>,

        /// Items per page (values below 1 use the default of 10)
        #[arg(short = 's', long, allow_negative_numbers = true)]
        page_size: Option<i64>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Pretty-printed JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_command() {
        let cli = Cli::parse_from([
            "pagekit", "page", "--input", "items.json", "--page", "-1", "-s", "3",
        ]);
        match cli.command {
            Commands::Page {
                input,
                page,
                page_size,
            } => {
                assert_eq!(input, PathBuf::from("items.json"));
                assert_eq!(page, Some(-1));
                assert_eq!(page_size, Some(3));
            }
            other => panic!("Expected Page, got {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_log_level_selection() {
        let cli = Cli::parse_from(["pagekit", "info", "--total", "10"]);
        assert_eq!(cli.log_level(), LogLevel::Info);

        let cli = Cli::parse_from(["pagekit", "-v", "info", "--total", "10"]);
        assert_eq!(cli.log_level(), LogLevel::Debug);

        let cli = Cli::parse_from(["pagekit", "-v", "--log-level", "warn", "info", "-t", "1"]);
        assert_eq!(cli.log_level(), LogLevel::Warn);
    }
}
