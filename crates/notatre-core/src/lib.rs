//! notatre core
//!
//! Resolves a single remote-desktop connection configuration from
//! environment-style inputs, for gateway hosts that ask an authentication
//! provider which connections a request may use.
//!
//! ```rust
//! use std::sync::Arc;
//! use notatre_core::{AuthenticationProvider, EnvironmentAuthProvider, MemorySource, Credentials};
//!
//! let inputs = Arc::new(
//!     MemorySource::new()
//!         .with("PROTOCOL", "rdp")
//!         .with("HOSTNAME", "desktop.internal")
//!         .with("DISABLE_COPY", "true"),
//! );
//! let provider = EnvironmentAuthProvider::with_source(inputs);
//!
//! let configs = provider.authorized_configurations(&Credentials::anonymous()).unwrap();
//! let config = &configs["default"];
//! assert_eq!(config.parameter("port"), Some("3389"));
//! assert_eq!(config.parameter("disable-copy"), Some("true"));
//! ```

pub mod types;
pub mod source;
pub mod logging;
pub mod config;
pub mod util;
pub mod resolver;
pub mod provider;

// Re-export commonly used types
pub use types::{ConnectionConfig, ResolvedConfiguration, ConfigurationMap, Credentials};

pub use source::{
    InputSource, SourceError, SourceResult,
    EnvSource, MemorySource, FileSource, ChainSource,
};

pub use logging::{Logger, LogLevel, SharedLogger, NoOpLogger, ConsoleLogger, MemoryLogger};

pub use config::Settings;

pub use resolver::{ConfigResolver, DEFAULT_CONFIG_NAME};

pub use provider::{AuthenticationProvider, EnvironmentAuthProvider, PROVIDER_IDENTIFIER};
