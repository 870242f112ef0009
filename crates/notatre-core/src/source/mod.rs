//! Input sources the resolver reads from
//!
//! This module provides a pluggable source system with:
//! - `InputSource` trait for implementing custom sources
//! - Built-in implementations: `EnvSource`, `MemorySource`, `FileSource`, `ChainSource`

mod traits;
mod env_source;
mod memory_source;
mod file_source;
mod chain_source;

pub use traits::{InputSource, SourceError, SourceResult};
pub use env_source::EnvSource;
pub use memory_source::MemorySource;
pub use file_source::FileSource;
pub use chain_source::ChainSource;
