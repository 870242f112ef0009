//! CLI argument parsing definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the log level (trace, debug, info, warn, error); overrides NOTATRE_LOG_LEVEL
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the connection configuration and print it
    Resolve {
        /// YAML file of KEY: value inputs, used where the environment has no value
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Prefix prepended to every environment variable name (e.g. GUAC_)
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Params)]
        format: OutputFormat,

        /// Include the password in clear text in the debug log
        #[arg(long)]
        log_secrets: bool,
    },

    /// Print the provider identifier
    Identifier,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Protocol on the first line, then one key=value per line
    Params,
    /// JSON object keyed by configuration name
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "notatre",
            "--log-level",
            "debug",
            "resolve",
            "--file",
            "inputs.yaml",
            "--format",
            "json",
        ]);

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::Resolve { file, prefix, format, log_secrets } => {
                assert_eq!(file, Some(PathBuf::from("inputs.yaml")));
                assert_eq!(prefix, None);
                assert_eq!(format, OutputFormat::Json);
                assert!(!log_secrets);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_resolve_defaults() {
        let cli = Cli::parse_from(["notatre", "resolve"]);
        assert!(matches!(
            cli.command,
            Commands::Resolve { format: OutputFormat::Params, log_secrets: false, .. }
        ));
    }

    #[test]
    fn test_parse_identifier() {
        let cli = Cli::parse_from(["notatre", "identifier"]);
        assert!(matches!(cli.command, Commands::Identifier));
    }
}
