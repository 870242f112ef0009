//! Process environment input source

use std::env;

use super::traits::{InputSource, SourceError, SourceResult};

/// Input source that reads process environment variables
///
/// Variables are read on every call, so changes to the environment are
/// picked up by the next resolution. An optional prefix lets several
/// deployments share one environment: with prefix `GUAC_`, a lookup of
/// `PROTOCOL` reads `GUAC_PROTOCOL`.
///
/// # Example
///
/// ```
/// use notatre_core::source::{InputSource, EnvSource};
///
/// let source = EnvSource::new();
/// // source.get("PROTOCOL") reads $PROTOCOL
/// assert_eq!(source.name(), "env");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: Option<String>,
}

impl EnvSource {
    /// Create a source reading unprefixed variables
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// Create a source that prepends `prefix` to every key
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: if prefix.is_empty() { None } else { Some(prefix) },
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Full variable name for a key
    pub fn variable_name(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, key),
            None => key.to_string(),
        }
    }
}

impl InputSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn try_get(&self, key: &str) -> SourceResult<Option<String>> {
        let variable = self.variable_name(key);
        match env::var_os(&variable) {
            None => Ok(None),
            Some(value) => value
                .into_string()
                .map(Some)
                .map_err(|_| SourceError::NotUnicode(variable)),
        }
    }
}
