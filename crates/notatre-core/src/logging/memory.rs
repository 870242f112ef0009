//! In-memory logger that keeps every record

use parking_lot::RwLock;

use super::traits::{LogLevel, Logger};

/// A captured log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// A logger that stores records instead of printing them
///
/// Useful for tests and for hosts that collect output before forwarding it.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: RwLock<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.read().clone()
    }

    /// Messages logged at exactly `level`
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .read()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records.write().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log_debug, log_warn};

    #[test]
    fn test_memory_logger_captures() {
        let logger = MemoryLogger::new();
        log_debug!(logger, "port={}", 3389);
        log_warn!(logger, "odd value");
        logger.log(LogLevel::Trace, "fine detail");

        let records = logger.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], LogRecord { level: LogLevel::Debug, message: "port=3389".into() });
        assert_eq!(logger.messages_at(LogLevel::Warn), vec!["odd value".to_string()]);
        // Trace folds into debug
        assert_eq!(logger.messages_at(LogLevel::Debug).len(), 2);

        logger.clear();
        assert!(logger.records().is_empty());
    }
}
