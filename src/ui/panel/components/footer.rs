//! Panel footer component
//!
//! Renders key bindings for the current presentation

use super::super::presentation::Presentation;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, presentation: &Presentation) {
    let footer_text = if presentation.is_idle() {
        "[←↑↓→/Tab] Mover | [Enter] Detalles | [G] Gráfica | [Q] Salir"
    } else {
        "[Esc] Cerrar | [Q] Salir"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
