//! Connection configuration types

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Placeholder written in place of secret values in log output
pub const REDACTED: &str = "********";

/// Parameter names whose values are masked by [`ConnectionConfig::to_log_line`]
const SECRET_PARAMETERS: &[&str] = &["password"];

/// Configuration for a single remote-desktop connection
///
/// Parameters keep their insertion order so that log lines and serialized
/// output are deterministic. Names are unique: setting an existing parameter
/// replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    protocol: String,
    parameters: Vec<(String, String)>,
}

impl ConnectionConfig {
    /// Create a configuration for the given protocol with no parameters
    pub fn new(protocol: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            parameters: Vec::new(),
        }
    }

    /// Protocol identifier (e.g. `rdp`, `vnc`)
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Set a parameter, replacing any existing value for the same name
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some(slot) = self.parameters.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.parameters.push((name, value));
        }
    }

    /// Builder form of [`set_parameter`](Self::set_parameter)
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_parameter(name, value);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }

    /// Parameters in insertion order
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Render parameters as a space-joined `key=value` sequence
    ///
    /// When `reveal_secrets` is false, secret parameters (currently only
    /// `password`) are written as [`REDACTED`].
    pub fn to_log_line(&self, reveal_secrets: bool) -> String {
        self.parameters
            .iter()
            .map(|(name, value)| {
                if !reveal_secrets && SECRET_PARAMETERS.contains(&name.as_str()) {
                    format!("{}={}", name, REDACTED)
                } else {
                    format!("{}={}", name, value)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Serializes parameters as a map in insertion order
struct OrderedParameters<'a>(&'a [(String, String)]);

impl Serialize for OrderedParameters<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for ConnectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ConnectionConfig", 2)?;
        state.serialize_field("protocol", &self.protocol)?;
        state.serialize_field("parameters", &OrderedParameters(&self.parameters))?;
        state.end()
    }
}

/// A configuration together with the name it is published under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfiguration {
    pub name: String,
    pub config: ConnectionConfig,
}

impl ResolvedConfiguration {
    pub fn new(name: impl Into<String>, config: ConnectionConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// Configurations handed to the host, keyed by name
///
/// Produced by this crate with zero or one entry.
pub type ConfigurationMap = BTreeMap<String, ConnectionConfig>;

impl From<ResolvedConfiguration> for ConfigurationMap {
    fn from(resolved: ResolvedConfiguration) -> Self {
        let mut map = ConfigurationMap::new();
        map.insert(resolved.name, resolved.config);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_keep_insertion_order() {
        let config = ConnectionConfig::new("rdp")
            .with_parameter("port", "3389")
            .with_parameter("hostname", "h")
            .with_parameter("security", "any");

        let names: Vec<&str> = config.parameters().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["port", "hostname", "security"]);
    }

    #[test]
    fn test_set_parameter_replaces_in_place() {
        let mut config = ConnectionConfig::new("vnc")
            .with_parameter("hostname", "a")
            .with_parameter("port", "5901");
        config.set_parameter("hostname", "b");

        assert_eq!(config.len(), 2);
        assert_eq!(config.parameter("hostname"), Some("b"));
        assert_eq!(config.parameters().next(), Some(("hostname", "b")));
    }

    #[test]
    fn test_log_line_masks_password() {
        let config = ConnectionConfig::new("rdp")
            .with_parameter("hostname", "h")
            .with_parameter("password", "hunter2");

        assert_eq!(config.to_log_line(false), "hostname=h password=********");
        assert_eq!(config.to_log_line(true), "hostname=h password=hunter2");
    }

    #[test]
    fn test_serialize_json() {
        let config = ConnectionConfig::new("rdp")
            .with_parameter("port", "3389")
            .with_parameter("hostname", "h");

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"protocol":"rdp","parameters":{"port":"3389","hostname":"h"}}"#
        );
    }

    #[test]
    fn test_configuration_map_from_resolved() {
        let resolved = ResolvedConfiguration::new("default", ConnectionConfig::new("vnc"));
        let map = ConfigurationMap::from(resolved);

        assert_eq!(map.len(), 1);
        assert_eq!(map["default"].protocol(), "vnc");
    }
}
