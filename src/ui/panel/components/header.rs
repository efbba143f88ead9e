//! Panel header component
//!
//! Renders the title block and polling status

use super::super::state::PanelState;
use super::super::utils::format_compact_timestamp;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub const TITLE: &str = "DOCENTES INGENIERÍA INFORMÁTICA TESSFP";
pub const SUBTITLE: &str = "Listado de docentes con datos relevantes";

pub fn render_header(f: &mut Frame, area: Rect, state: &PanelState) {
    let last_update = state
        .last_snapshot()
        .map(|info| format!("{} (#{})", format_compact_timestamp(&info.applied_at), info.seq))
        .unwrap_or_else(|| "nunca".to_string());

    let mut status = vec![
        Span::styled("Fuente: ", Style::default().fg(Color::Gray)),
        Span::styled(state.endpoint.clone(), Style::default().fg(Color::LightBlue)),
        Span::styled("  Docentes: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.records().len().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Actualizado: ", Style::default().fg(Color::Gray)),
        Span::styled(last_update, Style::default().fg(Color::LightGreen)),
    ];
    if state.failed_polls() > 0 {
        status.push(Span::styled(
            format!("  {} fallos seguidos", state.failed_polls()),
            Style::default().fg(Color::LightRed),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            SUBTITLE,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(status),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(header, area);
}
