//! Resolution of connection configuration from input sources

mod config_resolver;
mod defaults;

pub use config_resolver::{ConfigResolver, DEFAULT_CONFIG_NAME, keys};
pub use defaults::{default_port, FIXED_PARAMETERS};
