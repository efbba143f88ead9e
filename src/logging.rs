//! `RUST_LOG`-driven filtering of activity events.

use crate::error_classifier::LogLevel;
use std::env;

/// Threshold read from `RUST_LOG`, defaulting to `info`.
pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

/// Takes the first directive of a `RUST_LOG` value, ignoring any `target=` prefix.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let directive = rust_log.split(',').next().unwrap_or(rust_log);
    let level = directive
        .rsplit('=')
        .next()
        .unwrap_or(directive)
        .trim()
        .to_lowercase();

    match level.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("WARN"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("docentes_panel=trace"), LogLevel::Trace);
        assert_eq!(
            parse_rust_log_level("docentes_panel=error,reqwest=debug"),
            LogLevel::Error
        );
        assert_eq!(parse_rust_log_level("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Info));
        assert!(should_log(LogLevel::Info, LogLevel::Info));
        assert!(!should_log(LogLevel::Debug, LogLevel::Info));
    }
}
