//! Configuration for the resolver itself
//!
//! Settings are read from any `InputSource` (usually the environment) or
//! from YAML.

mod settings;

pub use settings::{Settings, LOG_LEVEL_VAR, LOG_SECRETS_VAR};
