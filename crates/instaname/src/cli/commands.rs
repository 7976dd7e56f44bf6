//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate brand names from a business description.
#[derive(Parser, Debug)]
#[command(name = "instaname")]
#[command(about = "Instaname - brand name generator")]
#[command(version)]
pub struct Cli {
    /// Configuration file layered over the user config
    #[arg(long, global = true, env = "INSTANAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model to use instead of the configured one
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one batch of names
    Generate {
        /// Business or product description (10 to 500 characters)
        description: String,

        /// Name that must not be suggested again (repeatable)
        #[arg(short = 'x', long = "exclude", value_name = "NAME")]
        exclude: Vec<String>,

        /// Print the response record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session with incremental regeneration
    Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from([
            "instaname",
            "--model",
            "gemini-2.5-flash",
            "generate",
            "A modern clothing brand for teenagers.",
            "-x",
            "Stylo",
            "--exclude",
            "Verve Wear",
            "--json",
        ]);

        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-flash"));
        match cli.command {
            Commands::Generate {
                description,
                exclude,
                json,
            } => {
                assert_eq!(description, "A modern clothing brand for teenagers.");
                assert_eq!(exclude, vec!["Stylo", "Verve Wear"]);
                assert!(json);
            }
            Commands::Session => panic!("expected generate"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["instaname", "session", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::Session));
    }
}
