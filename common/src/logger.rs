use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let level_tag = match level {
            LogLevel::Info => "",
            LogLevel::Error => "[ERROR]",
        };
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}]{} {}", timestamp, prefix, level_tag, message),
            None => format!("[{}]{} {}", timestamp, level_tag, message),
        }
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        match level {
            LogLevel::Info => println!("{}", line),
            LogLevel::Error => eprintln!("{}", line),
        }
    }
}

/// Installs the process-wide logger. Only the first call has an effect.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Logs through the installed logger, falling back to an unprefixed one.
pub fn log(level: LogLevel, message: &str) {
    LOGGER.get_or_init(|| Logger::new(None)).log(level, message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()));
        let line = logger.format_line(LogLevel::Info, "hello");
        assert!(line.contains("[Client] hello"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_format_line_marks_errors() {
        let logger = Logger::new(None);
        let line = logger.format_line(LogLevel::Error, "texture missing");
        assert!(line.ends_with("[ERROR] texture missing"));
    }
}
