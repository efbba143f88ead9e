//! Panel main renderer

use super::components::confetti::Confetti;
use super::components::{cards, chart, footer, header, logs, modal};
use super::layout::PanelLayout;
use super::presentation::Presentation;
use super::state::PanelState;
use super::view::build_view;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

const CARD_CONFETTI_SEED: u64 = 0x00C0_FFEE;
const CHART_CONFETTI_SEED: u64 = 0x0000_BA55;

pub fn render_panel(f: &mut Frame, state: &PanelState) {
    let area = f.area();
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            area,
        );
    }

    let view = build_view(state);
    let layout = PanelLayout::new(area);

    header::render_header(f, layout.header, state);
    cards::render_cards(f, layout.cards, &view, state.focused());
    chart::render_chart(
        f,
        layout.chart,
        &view.chart,
        matches!(state.presentation(), Presentation::ChartDetail(_)),
    );
    logs::render_logs_panel(f, layout.logs, state);
    footer::render_footer(f, layout.footer, state.presentation());

    // Confetti goes under the modal so the open overlay stays readable.
    if view.card_effect {
        f.render_widget(
            Confetti::new(area.width, area.height, state.tick, CARD_CONFETTI_SEED),
            area,
        );
    }
    if view.chart_effect {
        f.render_widget(
            Confetti::new(area.width, area.height, state.tick, CHART_CONFETTI_SEED),
            area,
        );
    }

    modal::render_overlay(f, area, view.overlay.as_ref(), &view.chart);
}
