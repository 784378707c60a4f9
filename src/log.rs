//! Simple file-based logging for debugging
//!
//! Nothing is written until [`init`] opens a log file, so the model types can
//! log freely without the host application opting in.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;

use crate::shared::config::LoggingConfig;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Initialize logging to the given file, truncating any previous content
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    *LOG_FILE.lock() = Some(file);

    log("=== xul-model log started ===");
    Ok(())
}

/// Initialize logging from configuration; does nothing when disabled
pub fn init_from_config(config: &LoggingConfig) -> std::io::Result<()> {
    if !config.enabled {
        return Ok(());
    }
    init(&config.path)
}

/// Close the log file; later messages are dropped
pub fn shutdown() {
    *LOG_FILE.lock() = None;
}

/// Whether a log file is currently open
pub fn is_enabled() -> bool {
    LOG_FILE.lock().is_some()
}

/// Current local time with millisecond precision
fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// Log a message to the file
pub fn log(msg: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(ref mut file) = *guard {
        let _ = writeln!(file, "[{}] {}", timestamp(), msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

/// Log with function context
#[macro_export]
macro_rules! log_fn {
    ($fn_name:expr) => {
        $crate::log::log(&format!("-> {}", $fn_name))
    };
    ($fn_name:expr, $($arg:tt)*) => {
        $crate::log::log(&format!("-> {}: {}", $fn_name, format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // The sink is process-global, so everything touching it lives in one test.
    #[test]
    fn test_log_file_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.log");

        let disabled = LoggingConfig {
            enabled: false,
            path: path.clone(),
        };
        init_from_config(&disabled).unwrap();
        assert!(!path.exists());

        init(&path).unwrap();
        assert!(is_enabled());
        crate::log!("added {} items", 3);
        crate::log_fn!("move_up", "index={}", 2);
        shutdown();
        assert!(!is_enabled());
        crate::log!("dropped");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // Other tests may log concurrently while the file is open
        assert!(lines.iter().any(|l| l.ends_with("=== xul-model log started ===")));
        assert!(lines.iter().all(|l| l.starts_with('[')));
        assert!(lines.iter().any(|l| l.ends_with("] added 3 items")));
        assert!(lines.iter().any(|l| l.ends_with("-> move_up: index=2")));
        assert!(!content.contains("dropped"));
    }
}
