//! Provider that serves a single configuration from the environment

use std::sync::Arc;

use crate::resolver::ConfigResolver;
use crate::source::{EnvSource, InputSource};
use crate::types::{ConfigurationMap, Credentials};

use super::traits::AuthenticationProvider;

/// Identifier advertised to the host
pub const PROVIDER_IDENTIFIER: &str = "jupyternotatre";

/// Authentication provider that performs no authentication
///
/// Every request gets the configuration resolved from the current inputs,
/// whatever credentials it carries. Inputs are re-read on each call.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use notatre_core::provider::{AuthenticationProvider, EnvironmentAuthProvider};
/// use notatre_core::source::MemorySource;
/// use notatre_core::types::Credentials;
///
/// let source = Arc::new(MemorySource::new().with("PROTOCOL", "vnc").with("HOSTNAME", "h"));
/// let provider = EnvironmentAuthProvider::with_source(source);
///
/// let configs = provider.authorized_configurations(&Credentials::anonymous()).unwrap();
/// assert_eq!(configs["default"].parameter("port"), Some("5901"));
/// ```
#[derive(Clone)]
pub struct EnvironmentAuthProvider {
    source: Arc<dyn InputSource>,
    resolver: ConfigResolver,
}

impl EnvironmentAuthProvider {
    /// Provider reading the process environment with a silent resolver
    pub fn new() -> Self {
        Self::with_source(Arc::new(EnvSource::new()))
    }

    /// Provider reading from an explicit source
    pub fn with_source(source: Arc<dyn InputSource>) -> Self {
        Self {
            source,
            resolver: ConfigResolver::new(),
        }
    }

    /// Replace the resolver (e.g. to attach a logger)
    pub fn with_resolver(mut self, resolver: ConfigResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn source(&self) -> &Arc<dyn InputSource> {
        &self.source
    }

    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }
}

impl Default for EnvironmentAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthenticationProvider for EnvironmentAuthProvider {
    fn identifier(&self) -> &str {
        PROVIDER_IDENTIFIER
    }

    fn authorized_configurations(&self, _credentials: &Credentials) -> Option<ConfigurationMap> {
        self.resolver
            .resolve(self.source.as_ref())
            .map(ConfigurationMap::from)
    }
}

impl std::fmt::Debug for EnvironmentAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentAuthProvider")
            .field("source", &self.source.name())
            .field("resolver", &self.resolver)
            .finish()
    }
}
