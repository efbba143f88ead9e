use crate::directory::error::FetchError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Maps poll failures to the level they are reported at.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &FetchError) -> LogLevel {
        match error {
            // Server hiccups and dropped connections usually clear up by the next tick
            FetchError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            FetchError::Network(_) => LogLevel::Warn,

            // Wrong URL or a backend that answers with something else
            FetchError::Http { .. } => LogLevel::Error,
            FetchError::Parse(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> FetchError {
        FetchError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_server_errors_are_warnings() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(500)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(503)), LogLevel::Warn);
    }

    #[test]
    fn test_client_and_parse_errors_are_errors() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(404)), LogLevel::Error);

        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&FetchError::Parse(parse)),
            LogLevel::Error
        );
    }
}
