//! Host-facing provider trait

use crate::types::{ConfigurationMap, Credentials};

/// What the gateway host calls to learn which connections a request may use
///
/// Implementations:
/// - `EnvironmentAuthProvider`: one configuration from environment-style inputs
/// - Host adapters wrap a provider for a specific gateway runtime
pub trait AuthenticationProvider: Send + Sync {
    /// Stable identifier the host uses to select and log this provider
    fn identifier(&self) -> &str;

    /// Configurations available to the request
    ///
    /// `None` tells the host this provider grants nothing.
    fn authorized_configurations(&self, credentials: &Credentials) -> Option<ConfigurationMap>;
}
