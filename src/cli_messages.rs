//! CLI command messaging system
//!
//! Consistent one-line messages for startup problems outside the TUI.
//! Warnings and errors go to stderr so they survive stdout redirection.

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    eprint!("\x1b[1;91m[WARN]\x1b[0m {}", title);
    if !details.is_empty() {
        eprintln!("\t {}", details);
    } else {
        eprintln!();
    }
}

/// Print CLI command error
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("\x1b[1;31m[ERROR]\x1b[0m {}", title);
    if let Some(details) = details {
        eprintln!("\x1b[1;31m[ERROR]\x1b[0m Details: {}", details);
    }
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}
