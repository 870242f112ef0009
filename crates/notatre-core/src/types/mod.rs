//! Core types for connection configuration

mod connection;
mod credentials;

pub use connection::{ConnectionConfig, ResolvedConfiguration, ConfigurationMap, REDACTED};
pub use credentials::Credentials;
