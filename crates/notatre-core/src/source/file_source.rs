//! YAML file input source
//!
//! Reads a flat mapping of `KEY: value` pairs, e.g.
//!
//! ```yaml
//! PROTOCOL: rdp
//! HOSTNAME: desktop.internal
//! PORT: 3390
//! DISABLE_COPY: true
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_yaml::Value;

use super::memory_source::MemorySource;
use super::traits::{InputSource, SourceError, SourceResult};

/// Parsed file contents; `None` marks an explicit `null`
type Entries = HashMap<String, Option<String>>;

/// Input source backed by a YAML file
///
/// Values keep the text written in the file: `PORT: 03389` reads as
/// `"03389"` and `HOSTNAME: 1e3` as `"1e3"`, never as a reformatted number.
/// `null` counts as unset. Every value must be a scalar.
///
/// Single lookups read the file each time. [`snapshot`](InputSource::snapshot)
/// parses it once and freezes the result.
///
/// # Example
///
/// ```no_run
/// use notatre_core::source::{InputSource, FileSource};
///
/// let source = FileSource::new("/etc/notatre/connection.yaml");
/// let protocol = source.get("PROTOCOL");
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> SourceResult<Entries> {
        if !self.path.exists() {
            return Err(SourceError::Unavailable(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_yaml::from_str::<Value>(&content)? {
            Value::Mapping(_) => {}
            // Empty document
            Value::Null => return Ok(Entries::new()),
            _ => {
                return Err(SourceError::Other(format!(
                    "{} must contain a mapping of names to values",
                    self.path.display()
                )))
            }
        }

        // Deserializing straight to strings keeps the scalar text as written
        Ok(serde_yaml::from_str::<Entries>(&content)?)
    }
}

impl InputSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn try_get(&self, key: &str) -> SourceResult<Option<String>> {
        Ok(self.load()?.remove(key).flatten())
    }

    fn snapshot(&self) -> Option<SourceResult<Arc<dyn InputSource>>> {
        let entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => return Some(Err(e)),
        };
        let values = entries
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();
        let frozen: Arc<dyn InputSource> = Arc::new(MemorySource::with_values(values));
        Some(Ok(frozen))
    }
}
