//! Command-line arguments and the resolved CLI configuration.

use crate::formatter::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Modelcat catalog navigator
#[derive(Parser, Debug)]
#[command(name = "modelcat")]
#[command(version, about = "Browse a data-model catalog from the terminal")]
pub struct Args {
    /// Catalog JSON file (default: built-in sample catalog)
    #[arg(short = 'c', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", value_enum, global = true)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the navigator tree as currently expanded
    Tree {
        /// Expand a node (repeatable)
        #[arg(long = "expand", value_name = "ID")]
        expand: Vec<String>,

        /// Collapse a node (repeatable)
        #[arg(long = "collapse", value_name = "ID")]
        collapse: Vec<String>,

        /// Expand every branch
        #[arg(long, default_value_t = false)]
        all: bool,
    },

    /// List every model at or below a node
    Models {
        /// Node id
        id: String,
    },

    /// Show the selection view for a node: properties for a model, a listing otherwise
    Show {
        /// Node id
        id: String,
    },

    /// Print node counts for the catalog
    Stats,

    /// Parse assistant actions from a JSON file and summarize them
    Actions {
        /// JSON file holding one action or an array of actions
        file: PathBuf,
    },

    /// Write the loaded catalog as JSON
    Export,
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub catalog: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
    pub command: Command,
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        Self {
            catalog: args.catalog,
            format: args.format,
            log_level: args.log_level,
            command: args.command,
        }
    }
}

impl CliConfig {
    /// Filter directive covering the workspace crates.
    pub fn log_directive(&self) -> String {
        format!(
            "modelcat_core={level},modelcat_cli={level}",
            level = self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tree_flags() {
        let args = Args::parse_from([
            "modelcat", "tree", "--expand", "lib-1", "--expand", "lib-2", "--collapse", "cat-1",
        ]);
        let config = CliConfig::from(args);

        assert_eq!(config.format, OutputFormat::Table);
        assert!(config.catalog.is_none());
        assert_eq!(
            config.command,
            Command::Tree {
                expand: vec!["lib-1".into(), "lib-2".into()],
                collapse: vec!["cat-1".into()],
                all: false,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "modelcat", "models", "cat-1", "--format", "json", "--catalog", "cat.json",
        ]);
        let config = CliConfig::from(args);

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.catalog, Some(PathBuf::from("cat.json")));
        assert_eq!(config.command, Command::Models { id: "cat-1".into() });
    }

    #[test]
    fn test_log_directive() {
        let args = Args::parse_from(["modelcat", "--log-level", "debug", "stats"]);
        let config = CliConfig::from(args);
        assert_eq!(config.log_directive(), "modelcat_core=debug,modelcat_cli=debug");
    }
}
