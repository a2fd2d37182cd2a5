//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and mirrors every record to the browser console (stderr off wasm32).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static INSTALLED: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// A single captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Render as `2024-01-01T00:00:00.000Z INFO target: message`
    pub fn format(&self) -> String {
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Circular-buffer logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        let capacity = config.capacity.max(1);
        Self {
            level: config.level,
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Snapshot of the buffered entries, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// Buffered entries rendered one per line
    pub fn dump(&self) -> String {
        self.recent()
            .iter()
            .map(LogEntry::format)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(entry.level, &entry.format());
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the logger as the global `log` backend.
///
/// Returns the leaked logger so callers can read the buffer later.
pub fn init(config: LoggerConfig) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = config.level;
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(config)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = INSTALLED.set(logger);
    Ok(logger)
}

/// The logger installed by [`init`], if any
pub fn installed() -> Option<&'static RollingLogger> {
    INSTALLED.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_latest_entries() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Trace, capacity: 2 });
        record(&logger, Level::Info, "first");
        record(&logger, Level::Info, "second");
        record(&logger, Level::Info, "third");

        let messages: Vec<String> = logger.recent().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["second".to_string(), "third".to_string()]);
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Warn, capacity: 10 });
        record(&logger, Level::Info, "quiet");
        record(&logger, Level::Error, "loud");

        let entries = logger.recent();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(entries[0].target, "test");
    }

    #[test]
    fn test_init_exposes_installed_buffer() {
        let logger = init(LoggerConfig { level: LevelFilter::Debug, capacity: 8 }).unwrap();
        log::warn!(target: "checkout", "card declined");

        let installed = installed().unwrap();
        assert!(std::ptr::eq(installed, logger));
        assert!(installed.dump().contains("checkout: card declined"));
    }

    #[test]
    fn test_zero_capacity_still_keeps_one() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Info, capacity: 0 });
        record(&logger, Level::Info, "a");
        record(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
        assert!(logger.dump().ends_with("test: b"));
    }
}
