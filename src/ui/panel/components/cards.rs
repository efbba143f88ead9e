//! Docente cards grid

use super::super::layout::card_slots;
use super::super::utils::named_color;
use super::super::view::{CardView, PanelView};
use crate::docente::Docente;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// The five attribute lines shown on a card and in the detail modal.
pub fn docente_lines(docente: &Docente) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let field = |label: &'static str, value: String| {
        Line::from(vec![Span::styled(label, bold), Span::raw(value)])
    };
    vec![
        field("Clave ISSEMYN: ", docente.issemyn.clone()),
        field("ID: ", docente.id.to_string()),
        field("Nombre: ", docente.nombre.clone()),
        field("Teléfono: ", docente.telefono.clone()),
        field("Sexo: ", docente.sexo.clone()),
    ]
}

/// Render one card per record, scrolled to keep the focused card visible.
pub fn render_cards(f: &mut Frame, area: Rect, view: &PanelView, focused: usize) {
    if view.cards.is_empty() {
        let waiting = Paragraph::new("Esperando datos de docentes...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(waiting, area);
        return;
    }

    for slot in card_slots(area, view.cards.len(), focused) {
        render_card(f, slot.area, &view.cards[slot.index], focused);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &CardView, focused: usize) {
    let background = named_color(card.background);
    let (border_type, border_style) = if card.index == focused {
        (
            BorderType::Thick,
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(Color::White))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let card_widget = Paragraph::new(docente_lines(&card.docente))
        .style(Style::default().fg(Color::White).bg(background))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(card_widget, area);
}
