/// Structured logging for the diagnostic harness
///
/// Tags every message with the harness stage that produced it and a
/// severity level. Console output only; the harness never writes files.

use chrono::Utc;
use std::fmt;
use std::sync::Mutex;

use crate::model::TransportError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Harness Stages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Environment,
    Api,
    Data,
    System,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Environment => write!(f, "ENV"),
            Stage::Api => write!(f, "API"),
            Stage::Data => write!(f, "DATA"),
            Stage::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - e.g. running offline or behind a firewall
    Expected,
    /// Unexpected failure - indicates service degradation or a local bug
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    fn format_entry(level: LogLevel, stage: Stage, site_id: Option<&str>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let site_part = site_id.map(|s| format!(" [{}]", s)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, stage, site_part, message)
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, stage: Stage, site_id: Option<&str>, message: &str) {
        if !self.enabled(level) {
            return;
        }

        if self.console_timestamps {
            let entry = Self::format_entry(level, stage, site_id, message);
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("   {}", entry),
                LogLevel::Info | LogLevel::Debug => println!("   {}", entry),
            }
        } else {
            let site_part = site_id.map(|s| format!(" [{}]", s)).unwrap_or_default();
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", stage, site_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", stage, site_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => {}  // Skip debug in non-timestamp mode
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger. Calling again replaces the settings.
pub fn init_logger(min_level: LogLevel, console_timestamps: bool) {
    if let Ok(mut guard) = LOGGER.lock() {
        *guard = Some(Logger {
            min_level,
            console_timestamps,
        });
    }
}

fn dispatch(level: LogLevel, stage: Stage, site_id: Option<&str>, message: &str) {
    if let Ok(Some(logger)) = LOGGER.lock().as_deref() {
        logger.log(level, stage, site_id, message);
    }
}

/// Log a general informational message
pub fn info(stage: Stage, site_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Info, stage, site_id, message);
}

/// Log a warning message
pub fn warn(stage: Stage, site_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Warning, stage, site_id, message);
}

/// Log an error message
pub fn error(stage: Stage, site_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Error, stage, site_id, message);
}

/// Log a debug message
pub fn debug(stage: Stage, site_id: Option<&str>, message: &str) {
    dispatch(LogLevel::Debug, stage, site_id, message);
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify a reachability failure.
///
/// Timeouts and refused connections are what an offline laptop produces,
/// so they are expected during setup. Server errors point at the service.
pub fn classify_transport_failure(err: &TransportError) -> FailureType {
    match err {
        TransportError::Timeout(_) | TransportError::Connect(_) => FailureType::Expected,
        TransportError::Other(_) => FailureType::Unknown,
    }
}

/// Classify a completed response that was not HTTP 200.
pub fn classify_status_failure(status: u16) -> FailureType {
    if status >= 500 {
        FailureType::Unexpected
    } else {
        FailureType::Unknown
    }
}

/// Log a transport failure with classification
pub fn log_transport_failure(endpoint: &str, err: &TransportError) {
    let failure_type = classify_transport_failure(err);
    let message = format!("GET failed [{}]: {}", failure_type, err);

    match failure_type {
        FailureType::Expected => debug(Stage::Api, Some(endpoint), &message),
        FailureType::Unexpected => error(Stage::Api, Some(endpoint), &message),
        FailureType::Unknown => warn(Stage::Api, Some(endpoint), &message),
    }
}

/// Log a non-success HTTP status with classification
pub fn log_status_failure(endpoint: &str, status: u16) {
    let failure_type = classify_status_failure(status);
    let message = format!("GET returned HTTP {} [{}]", status, failure_type);

    match failure_type {
        FailureType::Expected => debug(Stage::Api, Some(endpoint), &message),
        FailureType::Unexpected => error(Stage::Api, Some(endpoint), &message),
        FailureType::Unknown => warn(Stage::Api, Some(endpoint), &message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_transport_failure_classification() {
        let timeout = TransportError::Timeout("operation timed out".to_string());
        assert_eq!(classify_transport_failure(&timeout), FailureType::Expected);

        let refused = TransportError::Connect("connection refused".to_string());
        assert_eq!(classify_transport_failure(&refused), FailureType::Expected);

        let other = TransportError::Other("body decode".to_string());
        assert_eq!(classify_transport_failure(&other), FailureType::Unknown);
    }

    #[test]
    fn test_status_failure_classification() {
        assert_eq!(classify_status_failure(503), FailureType::Unexpected);
        assert_eq!(classify_status_failure(404), FailureType::Unknown);
    }

    #[test]
    fn test_min_level_filters_lower_levels() {
        let logger = Logger {
            min_level: LogLevel::Info,
            console_timestamps: false,
        };
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn test_logging_before_and_after_init_does_not_panic() {
        info(Stage::System, None, "before init");
        init_logger(LogLevel::Error, false);
        info(Stage::Api, Some("nwis/site"), "filtered out below Error");
        warn(Stage::Api, None, "filtered out below Error");
    }

    #[test]
    fn test_entry_format_includes_stage_and_site() {
        let entry = Logger::format_entry(LogLevel::Warning, Stage::Api, Some("nwis/site"), "slow");
        assert!(entry.contains("WARN API [nwis/site]: slow"), "got: {}", entry);
        assert!(entry.ends_with("slow"));
    }
}
