//! Modal dialog used by both overlays

use super::super::utils::centered_rect;
use super::super::view::{ChartData, OverlayView};
use super::cards::docente_lines;
use super::chart::{CHART_TITLE, bar_chart};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

const MODAL_WIDTH_PERCENT: u16 = 60;
const MODAL_HEIGHT_PERCENT: u16 = 60;

/// What a modal shows between its header and footer
pub enum ModalBody<'a> {
    Lines(Vec<Line<'a>>),
    Chart(&'a ChartData),
}

pub struct Modal<'a> {
    pub open: bool,
    pub title: &'a str,
    pub body: ModalBody<'a>,
    pub footer: &'a str,
}

impl Modal<'_> {
    /// Screen area a modal occupies within `area`.
    pub fn area(area: Rect) -> Rect {
        centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area)
    }

    /// Row holding the footer text within `area`. Clicking it closes the modal.
    pub fn footer_row(area: Rect) -> Rect {
        let popup = Self::area(area);
        // Inside the bottom border, below the footer's top rule.
        Rect::new(
            popup.x.saturating_add(1),
            popup.bottom().saturating_sub(2),
            popup.width.saturating_sub(2),
            1,
        )
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        if !self.open {
            return;
        }
        let popup = Self::area(area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(Line::from(self.title).alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(Color::Rgb(16, 20, 24)));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(2)])
            .split(inner);

        match self.body {
            ModalBody::Lines(lines) => {
                let body = Paragraph::new(lines)
                    .style(Style::default().fg(Color::White))
                    .wrap(Wrap { trim: true });
                f.render_widget(body, chunks[0]);
            }
            ModalBody::Chart(chart) => {
                f.render_widget(bar_chart(chart, chunks[0].width + 2), chunks[0]);
            }
        }

        let footer = Paragraph::new(self.footer)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(footer, chunks[1]);
    }
}

/// Draw the modal matching the current overlay, if one is open.
pub fn render_overlay(f: &mut Frame, area: Rect, overlay: Option<&OverlayView>, chart: &ChartData) {
    let Some(overlay) = overlay else {
        return;
    };
    let modal = match overlay {
        OverlayView::RecordDetail(docente) => {
            let mut lines = docente_lines(docente);
            // Heading line, mirroring the card title
            if let Some(first) = lines.first_mut() {
                first.style = Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD);
            }
            Modal {
                open: true,
                title: "Detalles del Docente",
                body: ModalBody::Lines(lines),
                footer: "[Esc] Cerrar",
            }
        }
        OverlayView::ChartDetail { .. } => Modal {
            open: true,
            title: CHART_TITLE,
            body: ModalBody::Chart(chart),
            footer: "[Esc] Cerrar",
        },
    };
    modal.render(f, area);
}
