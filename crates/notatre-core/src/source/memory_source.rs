//! In-memory input source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{InputSource, SourceResult};

/// In-memory input source for testing and embedding
///
/// Lets a host hand the resolver an explicit snapshot instead of the process
/// environment.
///
/// # Thread Safety
///
/// The source uses `RwLock` internally and is safe to share between threads.
///
/// # Example
///
/// ```
/// use notatre_core::source::{InputSource, MemorySource};
///
/// let source = MemorySource::new()
///     .with("PROTOCOL", "vnc")
///     .with("HOSTNAME", "desktop");
/// assert_eq!(source.get("HOSTNAME"), Some("desktop".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySource {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create a source with initial values
    pub fn with_values(initial: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(initial),
        }
    }

    /// Builder-style insert
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }

    pub fn clear(&self) {
        self.values.write().clear();
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> FromIterator<(K, V)> for MemorySource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::with_values(values)
    }
}

impl InputSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn try_get(&self, key: &str) -> SourceResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }
}

impl Clone for MemorySource {
    fn clone(&self) -> Self {
        Self::with_values(self.values.read().clone())
    }
}
