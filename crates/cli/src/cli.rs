use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gazelle_ts_core::Config;
use std::path::PathBuf;

use crate::commands::{check_command, config_command, directives_command, kinds_command};

#[derive(Parser, Debug)]
#[command(name = "gazelle-ts")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective TypeScript configuration of each package
    #[command(visible_alias = "c")]
    Config {
        #[command(flatten)]
        walk: WalkArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Include directories without a build file
        #[arg(short, long)]
        all: bool,
    },
    /// Check existing ts_project rules against their kind and load source
    Check {
        #[command(flatten)]
        walk: WalkArgs,
    },
    /// List the directives the TypeScript extension understands
    Directives,
    /// Print the rule kinds and load sources as JSON
    Kinds,
}

/// Where and how to walk the repository
#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    /// Repository root
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Build file names to look for, in priority order
    #[arg(
        long = "build-file-name",
        value_delimiter = ',',
        default_values = ["BUILD.bazel", "BUILD"]
    )]
    pub build_file_names: Vec<String>,
}

/// Dispatch a parsed command line
pub fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Config { walk, json, all } => config_command(&walk, config, json, all),
        Commands::Check { walk } => check_command(&walk, config),
        Commands::Directives => directives_command(),
        Commands::Kinds => kinds_command(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_walk_args_defaults() {
        let cli = Cli::parse_from(["gazelle-ts", "config"]);
        match cli.command {
            Commands::Config { walk, json, all } => {
                assert_eq!(walk.root, PathBuf::from("."));
                assert_eq!(walk.build_file_names, vec!["BUILD.bazel", "BUILD"]);
                assert!(!json);
                assert!(!all);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_build_file_names_are_comma_separated() {
        let cli = Cli::parse_from(["gazelle-ts", "check", "repo", "--build-file-name", "BUILD,BUILD.bazel"]);
        match cli.command {
            Commands::Check { walk } => {
                assert_eq!(walk.root, PathBuf::from("repo"));
                assert_eq!(walk.build_file_names, vec!["BUILD", "BUILD.bazel"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
