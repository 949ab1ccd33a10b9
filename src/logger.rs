use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Opens (or creates) the log file. Later calls keep the first file.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log_at(level: Level, message: &str) {
    if let Ok(mut guard) = LOGGER.lock()
        && let Some(logger) = guard.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(logger, "[{}] {} {}", timestamp, level.as_str(), message);
    }
}

pub fn info(message: &str) {
    log_at(Level::Info, message);
}

pub fn warn(message: &str) {
    log_at(Level::Warn, message);
}

pub fn error(message: &str) {
    log_at(Level::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_written_with_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emobalance.log");
        // The only init in the test binary, so this file wins.
        init(&path);
        info("info message");
        warn("warn message");
        error("error message");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO info message"));
        assert!(contents.contains("WARN warn message"));
        assert!(contents.contains("ERROR error message"));
    }
}
