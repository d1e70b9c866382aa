use std::time::{SystemTime, UNIX_EPOCH};

use ic_canister_log::{declare_log_buffer, entry_counter, export, GlobalBuffer, LogEntry, Sink};
use lazy_static::lazy_static;

// High-priority messages.
declare_log_buffer!(name = INFO_BUF, capacity = 1000);

// Low-priority info messages.
declare_log_buffer!(name = DEBUG_BUF, capacity = 1000);

pub const INFO: PrintProxySink = PrintProxySink("INFO", &INFO_BUF);
pub const DEBUG: PrintProxySink = PrintProxySink("DEBUG", &DEBUG_BUF);

/// Environment variable that turns on mirroring of log entries to stderr.
pub const LOG_ENV_VAR: &str = "V3_POOL_MATH_LOG";

lazy_static! {
    static ref MIRROR_TO_STDERR: bool = std::env::var_os(LOG_ENV_VAR).is_some();
}

/// Appends a formatted message to a sink.
///
/// Unlike `ic_canister_log::log!` nothing is written to stdout; stderr output is
/// controlled by [`LOG_ENV_VAR`].
macro_rules! log {
    ($sink:expr, $($arg:tt)*) => {{
        ::ic_canister_log::Sink::append(
            &$sink,
            $crate::logs::new_entry(std::format!($($arg)*), std::file!(), std::line!()),
        );
    }};
}
pub(crate) use log;

#[doc(hidden)]
pub fn new_entry(message: String, file: &'static str, line: u32) -> LogEntry {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    LogEntry {
        timestamp,
        message,
        file,
        line,
        counter: entry_counter::increment(),
    }
}

pub struct PrintProxySink(&'static str, &'static GlobalBuffer);

impl PrintProxySink {
    /// Entries retained by this sink on the current thread, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        export(self.1)
    }
}

impl Sink for PrintProxySink {
    fn append(&self, entry: LogEntry) {
        if *MIRROR_TO_STDERR {
            eprintln!("{} {}:{} {}", self.0, entry.file, entry.line, entry.message);
        }
        self.1.append(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_lands_in_its_own_buffer() {
        log!(INFO, "[test]: info {}", 1);
        log!(DEBUG, "[test]: debug {}", 2);

        let info: Vec<String> = INFO.entries().into_iter().map(|e| e.message).collect();
        let debug: Vec<String> = DEBUG.entries().into_iter().map(|e| e.message).collect();
        assert!(info.contains(&"[test]: info 1".to_string()));
        assert!(!info.contains(&"[test]: debug 2".to_string()));
        assert!(debug.contains(&"[test]: debug 2".to_string()));
    }

    #[test]
    fn test_entries_are_numbered_in_order() {
        log!(DEBUG, "[test]: first");
        log!(DEBUG, "[test]: second");

        let entries = DEBUG.entries();
        let first = entries.iter().find(|e| e.message == "[test]: first").unwrap();
        let second = entries.iter().find(|e| e.message == "[test]: second").unwrap();
        assert!(first.counter < second.counter);
        assert!(first.line < second.line);
        assert!(first.file.ends_with("logs.rs"));
    }
}
