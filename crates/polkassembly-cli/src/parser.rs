//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;
use crate::config::CheckConfig;

/// Command-line interface for checking payloads against the Polkassembly
/// API schema.
#[derive(Parser)]
#[command(name = "pa-schema")]
#[command(about = "Check and normalize Polkassembly API payloads")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Accept keys the schema does not know
    #[arg(long = "allow-unknown-keys", global = true)]
    pub allow_unknown_keys: bool,

    /// Reject payloads that gain default-valued keys on re-encode
    #[arg(long = "strict-defaults", global = true)]
    pub strict_defaults: bool,

    /// Print compact JSON
    #[arg(long = "compact", global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Apply flag overrides on top of an environment-derived config.
    ///
    /// Flags only ever tighten or loosen in their own direction; an absent
    /// flag leaves the config value alone.
    #[must_use]
    pub const fn apply_to(&self, mut config: CheckConfig) -> CheckConfig {
        if self.allow_unknown_keys {
            config = config.with_allow_unknown_keys(true);
        }
        if self.strict_defaults {
            config = config.with_allow_added_defaults(false);
        }
        if self.compact {
            config = config.with_pretty(false);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["pa-schema", "types", "--verbose", "--compact"]);
        assert!(cli.verbose);
        assert!(cli.compact);
        assert!(matches!(cli.command, Some(Commands::Types { area: None })));
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::parse_from(["pa-schema", "check", "post", "fixtures/post.json"]);
        match cli.command {
            Some(Commands::Check { kind, input }) => {
                assert_eq!(kind, "post");
                assert_eq!(input, PathBuf::from("fixtures/post.json"));
            }
            _ => panic!("Expected check command"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "pa-schema",
            "--allow-unknown-keys",
            "--strict-defaults",
            "config",
        ]);
        let config = cli.apply_to(CheckConfig::default());
        assert!(config.allow_unknown_keys);
        assert!(!config.allow_added_defaults);
        assert!(config.pretty);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["pa-schema", "config"]);
        let base = CheckConfig::new().with_allow_unknown_keys(true).with_pretty(false);
        assert_eq!(cli.apply_to(base), base);
    }
}
