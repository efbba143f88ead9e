//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// The message with its colored tag
    pub fn formatted(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    pub fn print(&self) {
        println!("{}", self.formatted());
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, endpoint: &str) {
    SessionMessage::info(format!("Starting {} mode polling {}", mode, endpoint)).print();
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("Panel de docentes cerrado correctamente").print();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_tags() {
        let info = SessionMessage::info("hola").formatted();
        assert!(info.contains("[INFO]"));
        assert!(info.ends_with(" hola"));
        assert!(SessionMessage::success("listo").formatted().contains("[SUCCESS]"));
    }
}
