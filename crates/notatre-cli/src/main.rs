use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use notatre_core::{
    AuthenticationProvider, ChainSource, ConfigResolver, ConsoleLogger, Credentials,
    EnvSource, EnvironmentAuthProvider, FileSource, InputSource, LogLevel, Settings,
    PROVIDER_IDENTIFIER,
};

mod cli;
mod output;

use cli::{Cli, Commands};

/// Exit status when no configuration could be resolved
const EXIT_NO_CONFIGURATION: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Settings always come from the unprefixed environment
    let mut settings = Settings::from_source(&EnvSource::new());
    if let Some(level) = &cli.log_level {
        settings.log_level = level.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }

    match cli.command {
        Commands::Identifier => {
            println!("{}", PROVIDER_IDENTIFIER);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { file, prefix, format, log_secrets } => {
            settings.log_secrets |= log_secrets;

            let env: Arc<dyn InputSource> = match prefix {
                Some(prefix) => Arc::new(EnvSource::with_prefix(prefix)),
                None => Arc::new(EnvSource::new()),
            };
            let source: Arc<dyn InputSource> = match file {
                Some(path) => {
                    let file_source = FileSource::new(path);
                    if !file_source.is_available() {
                        bail!("Input file {} does not exist", file_source.path().display());
                    }
                    Arc::new(ChainSource::new(vec![env, Arc::new(file_source)]))
                }
                None => env,
            };

            let logger = Arc::new(ConsoleLogger::new().with_level(settings.log_level));
            let provider = EnvironmentAuthProvider::with_source(source)
                .with_resolver(ConfigResolver::from_settings(&settings, logger));

            match provider.authorized_configurations(&Credentials::anonymous()) {
                Some(configs) => {
                    println!("{}", output::render(&configs, format)?);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("no configuration available");
                    Ok(ExitCode::from(EXIT_NO_CONFIGURATION))
                }
            }
        }
    }
}
