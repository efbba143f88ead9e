// Module declarations
mod app;
pub mod input;
pub mod panel;
// Re-exports for external use
pub use app::{App, UIConfig, run};
