//! Core traits and types for input sources

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while reading from an input source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Value for {0} is not valid unicode")]
    NotUnicode(String),

    #[error("Source not available: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Source error: {0}")]
    Other(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// A read-only view of named string inputs
///
/// Implementations:
/// - Process environment (`EnvSource`)
/// - In-memory for testing and embedding (`MemorySource`)
/// - YAML file of `KEY: value` pairs (`FileSource`)
/// - Ordered fallback over other sources (`ChainSource`)
///
/// Values are looked up at call time. Only [`snapshot`](InputSource::snapshot)
/// captures them.
///
/// # Example
///
/// ```
/// use notatre_core::source::{InputSource, MemorySource};
///
/// let source = MemorySource::new().with("PROTOCOL", "rdp");
/// assert_eq!(source.get("PROTOCOL"), Some("rdp".to_string()));
/// assert_eq!(source.get("HOSTNAME"), None);
/// ```
pub trait InputSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Check if this source can be read at all
    ///
    /// A file source whose file does not exist reports `false`.
    fn is_available(&self) -> bool {
        true
    }

    /// Read a value, reporting failures
    ///
    /// `Ok(None)` means the key is not set.
    fn try_get(&self, key: &str) -> SourceResult<Option<String>>;

    /// Read a value, treating any failure as absence
    fn get(&self, key: &str) -> Option<String> {
        self.try_get(key).ok().flatten()
    }

    /// Check if a key is set
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Capture the current values so a series of reads sees one state
    ///
    /// `None` means reads are already cheap and consistent, so the source is
    /// used as is.
    fn snapshot(&self) -> Option<SourceResult<Arc<dyn InputSource>>> {
        None
    }
}
