use chrono::Utc;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum LogLevel {
    Info(Color),
    Warn,
    Error,
}

impl LogLevel {
    fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info(_) => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn ansi_code(&self) -> &'static str {
        match self {
            LogLevel::Info(color) => color.to_ansi_code(),
            LogLevel::Warn => "\x1b[93m",  // Bright Yellow
            LogLevel::Error => "\x1b[91m", // Bright Red
        }
    }
}

/// Console color for informational entries.
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
            Color::Magenta => "\x1b[35m",
            Color::White => "\x1b[37m",
        }
    }
}

/// Writes timestamped entries to a log file and, on request, to the console.
///
/// A logger built with [`Logger::console`] has no file and only echoes to stdout.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Creates a new `Logger` writing to `<log_dir>/<name>.log`.
    ///
    /// The file is truncated if it already exists.
    ///
    /// # Errors
    /// `LoggerError::InvalidPath` if `log_dir` is not an existing directory, or
    /// `LoggerError::IoError` if the file cannot be created.
    pub fn new(log_dir: &Path, name: &str) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(format!(
                "{} is not a directory.",
                log_dir.display()
            )));
        }

        let sanitized_name = name.replace([':', '/', '\\'], "_");
        let log_file = log_dir.join(format!("{}.log", sanitized_name));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)
            .map_err(LoggerError::from)?;

        Ok(Logger {
            log_file: Some(log_file),
        })
    }

    /// Creates a logger without a backing file.
    pub fn console() -> Self {
        Logger { log_file: None }
    }

    /// Path of the backing log file, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    fn log(&self, level: LogLevel, message: &str, to_console: bool) -> Result<(), LoggerError> {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let log_message = format!("[{}] [{}]: {}\n", level.tag(), timestamp, message);

        // Console-only loggers always echo, otherwise the entry would go nowhere.
        if to_console || self.log_file.is_none() {
            print!("{}{}\x1b[0m", level.ansi_code(), log_message);
            io::stdout().flush().map_err(LoggerError::from)?;
        }

        if let Some(path) = &self.log_file {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(LoggerError::from)?;
            file.write_all(log_message.as_bytes())
                .map_err(LoggerError::from)?;
            file.flush().map_err(LoggerError::from)?;
        }

        Ok(())
    }

    /// Logs an informational message.
    ///
    /// # Parameters
    /// - `message`: The informational message to log.
    /// - `color`: The color to use for the console output.
    /// - `to_console`: Whether to log the message to the console as well.
    pub fn info(&self, message: &str, color: Color, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Info(color), message, to_console)
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Warn, message, to_console)
    }

    /// Logs an error message.
    pub fn error(&self, message: &str, to_console: bool) -> Result<(), LoggerError> {
        self.log(LogLevel::Error, message, to_console)
    }
}

#[derive(Debug)]
pub enum LoggerError {
    IoError(std::io::Error),
    InvalidPath(String),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::IoError(e) => write!(f, "I/O Error: {}", e),
            LoggerError::InvalidPath(msg) => write!(f, "Invalid Path: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::IoError(e) => Some(e),
            LoggerError::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(err: std::io::Error) -> Self {
        LoggerError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_logger_writes_every_level_to_file() {
        let log_dir = std::env::temp_dir().join("flight_lines_logger_levels");
        fs::create_dir_all(&log_dir).expect("Failed to create test directory");

        let logger = Logger::new(&log_dir, "visualizer").expect("Failed to create logger");
        logger
            .info("Loaded 3 flights", Color::Green, false)
            .expect("Failed to log info");
        logger
            .warn("Skipping record 1", false)
            .expect("Failed to log warning");
        logger
            .error("Could not read data.json", false)
            .expect("Failed to log error");

        let log_contents =
            fs::read_to_string(log_dir.join("visualizer.log")).expect("Failed to read log file");

        assert!(log_contents.contains("[INFO]"));
        assert!(log_contents.contains("Loaded 3 flights"));
        assert!(log_contents.contains("[WARN]"));
        assert!(log_contents.contains("[ERROR]"));
        assert_eq!(log_contents.lines().count(), 3);

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_logger_sanitizes_file_name() {
        let log_dir = std::env::temp_dir().join("flight_lines_logger_names");
        fs::create_dir_all(&log_dir).expect("Failed to create test directory");

        let logger = Logger::new(&log_dir, "session:1").expect("Failed to create logger");
        assert_eq!(logger.log_file(), Some(log_dir.join("session_1.log").as_path()));

        fs::remove_dir_all(&log_dir).expect("Failed to remove test directory");
    }

    #[test]
    fn test_invalid_path() {
        let invalid_path = Path::new("/invalid/path");

        let result = Logger::new(invalid_path, "visualizer");
        assert!(matches!(result, Err(LoggerError::InvalidPath(_))));
    }

    #[test]
    fn test_console_logger_has_no_file() {
        let logger = Logger::console();
        assert!(logger.log_file().is_none());
        assert!(logger.warn("console only", false).is_ok());
    }
}
