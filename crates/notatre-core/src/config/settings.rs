//! Settings for the resolver itself

use serde::Deserialize;

use crate::logging::LogLevel;
use crate::source::InputSource;
use crate::util::parse_bool;

/// Variable holding the log level (`trace`, `debug`, `info`, `warn`, `error`)
pub const LOG_LEVEL_VAR: &str = "NOTATRE_LOG_LEVEL";

/// Variable that, when truthy, writes the password unmasked into the debug log
pub const LOG_SECRETS_VAR: &str = "NOTATRE_LOG_SECRETS";

/// Settings controlling how resolution is logged
///
/// These are separate from the connection inputs: they tune this crate, not
/// the remote session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum level written by console logging
    pub log_level: LogLevel,
    /// Write the password in clear text in the resolved-parameters log line
    pub log_secrets: bool,
}

impl Settings {
    /// Read settings from a source, falling back to defaults
    ///
    /// Unrecognised values keep the default rather than failing.
    pub fn from_source(source: &dyn InputSource) -> Self {
        let defaults = Self::default();

        let log_level = source
            .get(LOG_LEVEL_VAR)
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.log_level);

        let log_secrets = source
            .get(LOG_SECRETS_VAR)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.log_secrets);

        Self {
            log_level,
            log_secrets,
        }
    }

    /// Parse settings from YAML
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, LogLevel::Info);
        assert!(!settings.log_secrets);
    }

    #[test]
    fn test_from_source() {
        let source = MemorySource::new()
            .with(LOG_LEVEL_VAR, "Debug")
            .with(LOG_SECRETS_VAR, "yes");

        let settings = Settings::from_source(&source);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert!(settings.log_secrets);
    }

    #[test]
    fn test_from_source_ignores_garbage() {
        let source = MemorySource::new()
            .with(LOG_LEVEL_VAR, "chatty")
            .with(LOG_SECRETS_VAR, "perhaps");

        assert_eq!(Settings::from_source(&source), Settings::default());
    }

    #[test]
    fn test_from_yaml() {
        let settings = Settings::from_yaml("log_level: warn\nlog_secrets: true\n").unwrap();
        assert_eq!(settings.log_level, LogLevel::Warn);
        assert!(settings.log_secrets);

        let partial = Settings::from_yaml("log_level: error\n").unwrap();
        assert_eq!(partial.log_level, LogLevel::Error);
        assert!(!partial.log_secrets);

        assert!(Settings::from_yaml("log_level: shouting\n").is_err());
    }
}
