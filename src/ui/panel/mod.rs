//! Docente panel
//!
//! State machine, derived view and terminal rendering for the staff panel

pub mod components;
pub mod effects;
pub mod layout;
pub mod presentation;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;
pub mod view;

// Re-export main types and functions for external use
pub use presentation::Presentation;
pub use renderer::render_panel;
pub use state::PanelState;
