//! Chained input source with fallback behavior

use std::sync::Arc;

use super::traits::{InputSource, SourceResult};

/// An input source that tries several sources in order
///
/// The first available source that has a value for a key wins. Sources that
/// report themselves unavailable, or fail to read, are skipped.
///
/// # Example
///
/// ```
/// use notatre_core::source::{InputSource, ChainSource, MemorySource};
/// use std::sync::Arc;
///
/// let overrides: Arc<dyn InputSource> = Arc::new(MemorySource::new().with("PORT", "3390"));
/// let defaults: Arc<dyn InputSource> =
///     Arc::new(MemorySource::new().with("PORT", "3389").with("PROTOCOL", "rdp"));
///
/// let chain = ChainSource::new(vec![overrides, defaults]);
/// assert_eq!(chain.get("PORT"), Some("3390".to_string()));
/// assert_eq!(chain.get("PROTOCOL"), Some("rdp".to_string()));
/// ```
pub struct ChainSource {
    sources: Vec<Arc<dyn InputSource>>,
}

impl ChainSource {
    /// Create a chain; earlier sources take priority
    pub fn new(sources: Vec<Arc<dyn InputSource>>) -> Self {
        Self { sources }
    }

    /// Get the sources in this chain
    pub fn sources(&self) -> &[Arc<dyn InputSource>] {
        &self.sources
    }
}

impl InputSource for ChainSource {
    fn name(&self) -> &str {
        "chain"
    }

    fn is_available(&self) -> bool {
        self.sources.iter().any(|s| s.is_available())
    }

    fn try_get(&self, key: &str) -> SourceResult<Option<String>> {
        let mut first_error = None;

        for source in &self.sources {
            if !source.is_available() {
                continue;
            }
            match source.try_get(key) {
                Ok(Some(value)) => return Ok(Some(value)),
                Ok(None) => {}
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(None),
        }
    }

    fn snapshot(&self) -> Option<SourceResult<Arc<dyn InputSource>>> {
        let mut captured = false;
        let sources = self
            .sources
            .iter()
            .map(|source| {
                if !source.is_available() {
                    return source.clone();
                }
                match source.snapshot() {
                    Some(Ok(frozen)) => {
                        captured = true;
                        frozen
                    }
                    // Unreadable sources stay live so lookups keep reporting the error
                    Some(Err(_)) | None => source.clone(),
                }
            })
            .collect();

        if captured {
            let frozen: Arc<dyn InputSource> = Arc::new(ChainSource::new(sources));
            Some(Ok(frozen))
        } else {
            None
        }
    }
}

impl std::fmt::Debug for ChainSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainSource").field("sources", &names).finish()
    }
}
