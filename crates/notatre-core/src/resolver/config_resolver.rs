//! Resolution of a connection configuration from named inputs
//!
//! The resolver is a pure function of its input snapshot:
//!
//! 1. `PROTOCOL` and `HOSTNAME` must be present and non-blank
//! 2. `PORT` falls back to the protocol default (`rdp` → 3389, `vnc` → 5901)
//! 3. `USERNAME` / `PASSWORD` pass through when present
//! 4. The fixed parameters are always added
//! 5. `DISABLE_COPY` / `DISABLE_PASTE` add their flag only when truthy
//!
//! Anything that prevents a configuration is reported as `None`, never as an
//! error. Read failures from the source count as the value being absent.
//! Sources that can snapshot (files) are captured once per call, so every key
//! comes from the same state.

use std::sync::Arc;

use crate::config::Settings;
use crate::logging::{NoOpLogger, SharedLogger};
use crate::source::InputSource;
use crate::types::{ConnectionConfig, ResolvedConfiguration};
use crate::util::parse_bool;
use crate::{log_debug, log_warn};

use super::defaults::{default_port, FIXED_PARAMETERS};

/// Name the resolved configuration is published under
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// Input keys read by the resolver
pub mod keys {
    pub const PROTOCOL: &str = "PROTOCOL";
    pub const HOSTNAME: &str = "HOSTNAME";
    pub const USERNAME: &str = "USERNAME";
    pub const PASSWORD: &str = "PASSWORD";
    pub const PORT: &str = "PORT";
    pub const DISABLE_COPY: &str = "DISABLE_COPY";
    pub const DISABLE_PASTE: &str = "DISABLE_PASTE";
}

/// Boolean inputs and the parameter each one switches on
const FLAG_PARAMETERS: &[(&str, &str)] = &[
    (keys::DISABLE_COPY, "disable-copy"),
    (keys::DISABLE_PASTE, "disable-paste"),
];

/// Stateless resolver from inputs to a single connection configuration
///
/// Safe to share across threads; every call works on its own snapshot.
///
/// # Example
///
/// ```
/// use notatre_core::resolver::ConfigResolver;
/// use notatre_core::source::MemorySource;
///
/// let source = MemorySource::new()
///     .with("PROTOCOL", "rdp")
///     .with("HOSTNAME", "desktop");
///
/// let resolved = ConfigResolver::new().resolve(&source).unwrap();
/// assert_eq!(resolved.name, "default");
/// assert_eq!(resolved.config.parameter("port"), Some("3389"));
/// ```
#[derive(Clone)]
pub struct ConfigResolver {
    logger: SharedLogger,
    log_secrets: bool,
}

impl ConfigResolver {
    /// Create a resolver that logs nothing
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NoOpLogger::new()),
            log_secrets: false,
        }
    }

    /// Create a resolver that logs to `logger`
    pub fn with_logger(logger: SharedLogger) -> Self {
        Self {
            logger,
            log_secrets: false,
        }
    }

    /// Create a resolver configured from settings
    pub fn from_settings(settings: &Settings, logger: SharedLogger) -> Self {
        Self::with_logger(logger).with_secret_logging(settings.log_secrets)
    }

    /// Write the password unmasked in the debug log line
    pub fn with_secret_logging(mut self, enabled: bool) -> Self {
        self.log_secrets = enabled;
        self
    }

    pub fn logs_secrets(&self) -> bool {
        self.log_secrets
    }

    /// Resolve the connection configuration from `source`
    ///
    /// Returns `None` when no configuration can be produced: a required
    /// input is missing, or there is no port and the protocol has no default.
    pub fn resolve(&self, source: &dyn InputSource) -> Option<ResolvedConfiguration> {
        match source.snapshot() {
            None => self.resolve_from(source),
            Some(Ok(frozen)) => self.resolve_from(frozen.as_ref()),
            Some(Err(e)) => {
                log_warn!(self.logger, "Cannot read {} source: {}", source.name(), e);
                None
            }
        }
    }

    fn resolve_from(&self, source: &dyn InputSource) -> Option<ResolvedConfiguration> {
        let protocol = self.read_required(source, keys::PROTOCOL);
        let hostname = self.read_required(source, keys::HOSTNAME);

        let (protocol, hostname) = match (protocol, hostname) {
            (Some(protocol), Some(hostname)) => (protocol, hostname),
            _ => {
                self.logger.debug("Insufficient parameters");
                return None;
            }
        };

        let port = match self.read_required(source, keys::PORT) {
            Some(port) => port,
            None => match default_port(&protocol) {
                Some(port) => port.to_string(),
                None => {
                    log_debug!(
                        self.logger,
                        "No {} given and protocol {} has no default port",
                        keys::PORT,
                        protocol
                    );
                    return None;
                }
            },
        };

        let mut config = ConnectionConfig::new(protocol);
        config.set_parameter("hostname", hostname);
        config.set_parameter("port", port);

        if let Some(username) = self.read(source, keys::USERNAME) {
            config.set_parameter("username", username);
        }
        if let Some(password) = self.read(source, keys::PASSWORD) {
            config.set_parameter("password", password);
        }

        for (name, value) in FIXED_PARAMETERS {
            config.set_parameter(*name, *value);
        }

        for (key, parameter) in FLAG_PARAMETERS {
            if self.read_flag(source, key) {
                config.set_parameter(*parameter, "true");
            }
        }

        self.logger.debug(&config.to_log_line(self.log_secrets));

        Some(ResolvedConfiguration::new(DEFAULT_CONFIG_NAME, config))
    }

    /// Read a value; source failures are logged and treated as absent
    fn read(&self, source: &dyn InputSource, key: &str) -> Option<String> {
        match source.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                log_warn!(self.logger, "Ignoring {} from {} source: {}", key, source.name(), e);
                None
            }
        }
    }

    /// Read a value that only counts when non-blank; returns it trimmed
    ///
    /// Trimming is deliberate: padded `PROTOCOL` / `HOSTNAME` / `PORT` still
    /// resolve. Credentials go through `read` and keep their exact text.
    fn read_required(&self, source: &dyn InputSource, key: &str) -> Option<String> {
        self.read(source, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn read_flag(&self, source: &dyn InputSource, key: &str) -> bool {
        let Some(value) = self.read(source, key) else {
            return false;
        };

        match parse_bool(&value) {
            Some(flag) => flag,
            None => {
                log_warn!(self.logger, "Unrecognised value {:?} for {}, treating as false", value, key);
                false
            }
        }
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("log_secrets", &self.log_secrets)
            .finish_non_exhaustive()
    }
}
