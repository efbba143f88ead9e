//! Panel utility functions
//!
//! Palette lookups and small layout helpers shared across components

use crate::events::Source;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Card and bar fill colors, applied cyclically by record index.
pub const PALETTE: [&str; 6] = ["red", "black", "violet", "darkgreen", "brown", "navy"];

/// Bar border colors, paired with `PALETTE` by position.
pub const BORDER_PALETTE: [&str; 6] = [
    "darkred",
    "gray",
    "purple",
    "darkgreen",
    "saddlebrown",
    "darkblue",
];

/// Fill color name for the record at `index`.
pub fn fill_color_name(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Border color name for the record at `index`.
pub fn border_color_name(index: usize) -> &'static str {
    BORDER_PALETTE[index % BORDER_PALETTE.len()]
}

/// Terminal color for a CSS color name used by the palettes
pub fn named_color(name: &str) -> Color {
    match name {
        "red" => Color::Rgb(255, 0, 0),
        "black" => Color::Rgb(0, 0, 0),
        "violet" => Color::Rgb(238, 130, 238),
        "darkgreen" => Color::Rgb(0, 100, 0),
        "brown" => Color::Rgb(165, 42, 42),
        "navy" => Color::Rgb(0, 0, 128),
        "darkred" => Color::Rgb(139, 0, 0),
        "gray" => Color::Rgb(128, 128, 128),
        "purple" => Color::Rgb(128, 0, 128),
        "saddlebrown" => Color::Rgb(139, 69, 19),
        "darkblue" => Color::Rgb(0, 0, 139),
        _ => Color::Reset,
    }
}

/// Get a ratatui color for an event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Poller => Color::Cyan,
        Source::Panel => Color::LightMagenta,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM:SS"
    if let Some((date, time)) = timestamp.split_once(' ') {
        if let Some(month_day) = date.get(5..10) {
            return format!("{} {}", month_day, time);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        return "Error al obtener los datos: sin conexión con el servidor".to_string();
    }
    if msg.contains("operation timed out") || msg.contains("TimedOut") {
        return "Error al obtener los datos: tiempo de espera agotado".to_string();
    }
    msg.to_string()
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
