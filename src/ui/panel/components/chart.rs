//! Bar chart of docente ids

use super::super::utils::named_color;
use super::super::view::ChartData;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders};

pub const CHART_TITLE: &str = "Gráfica de IDs de Docentes";

/// Build the bar chart widget for `chart`, sizing bars to fit `width` columns.
pub fn bar_chart(chart: &ChartData, width: u16) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = match chart.datasets.first() {
        Some(dataset) => chart
            .labels
            .iter()
            .zip(&dataset.data)
            .enumerate()
            .map(|(i, (label, value))| {
                let fill = dataset
                    .background_color
                    .get(i)
                    .map_or(Color::Reset, |name| named_color(name));
                // A zero border width leaves the value label unframed.
                let border = match dataset.border_color.get(i) {
                    Some(name) if dataset.border_width > 0 => named_color(name),
                    _ => Color::Reset,
                };
                Bar::default()
                    .value((*value).max(0) as u64)
                    .text_value(value.to_string())
                    .label(Line::from(label.clone()))
                    .style(Style::default().fg(fill))
                    .value_style(Style::default().fg(Color::White).bg(border))
            })
            .collect(),
        None => Vec::new(),
    };

    // Borders take two columns; each bar gets its width plus a one column gap.
    let per_bar = if bars.is_empty() {
        1
    } else {
        width.saturating_sub(2) / bars.len() as u16
    };
    let bar_width = per_bar.saturating_sub(1).clamp(1, 8);

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .label_style(Style::default().fg(Color::Gray))
}

/// Render the chart inside a titled block with the dataset label as legend.
pub fn render_chart(f: &mut Frame, area: Rect, chart: &ChartData, highlight: bool) {
    let legend = chart
        .datasets
        .first()
        .map(|dataset| format!(" ■ {} ", dataset.label))
        .unwrap_or_default();
    let border_color = if highlight {
        Color::LightYellow
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(CHART_TITLE)
        .title_bottom(Line::from(legend))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(bar_chart(chart, area.width).block(block), area);
}
