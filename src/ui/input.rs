//! Keyboard and mouse mapping
//!
//! Turns terminal input into panel actions. Which overlay is open decides
//! what Esc and clicks mean, mirroring the modal's close callback.

use crate::ui::panel::Presentation;
use crate::ui::panel::components::modal::Modal;
use crate::ui::panel::layout::{CardSlot, PanelLayout, card_at};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveFocus(isize),
    FocusAndSelect(usize),
    SelectFocused,
    /// Open the chart overlay. The chart is a single aggregate, so the index
    /// only records what opened it.
    SelectChart(usize),
    CloseRecordDetail,
    CloseChartDetail,
}

/// Action for the overlay's close callback.
fn close_action(presentation: &Presentation) -> Option<Action> {
    match presentation {
        Presentation::Idle => None,
        Presentation::RecordDetail(_) => Some(Action::CloseRecordDetail),
        Presentation::ChartDetail(_) => Some(Action::CloseChartDetail),
    }
}

pub fn action_for_key(key: KeyEvent, presentation: &Presentation, columns: usize) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Esc => close_action(presentation).or(Some(Action::Quit)),
        // Everything below only applies to the card grid.
        _ if !presentation.is_idle() => None,
        KeyCode::Left | KeyCode::BackTab => Some(Action::MoveFocus(-1)),
        KeyCode::Right | KeyCode::Tab => Some(Action::MoveFocus(1)),
        KeyCode::Up => Some(Action::MoveFocus(-(columns as isize))),
        KeyCode::Down => Some(Action::MoveFocus(columns as isize)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectFocused),
        KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(Action::SelectChart(0))
        }
        _ => None,
    }
}

pub fn action_for_mouse(
    mouse: MouseEvent,
    presentation: &Presentation,
    frame_area: Rect,
    layout: &PanelLayout,
    slots: &[CardSlot],
) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let position = Position::new(mouse.column, mouse.row);

    if !presentation.is_idle() {
        // The backdrop and the footer's "Cerrar" both close the modal.
        if Modal::footer_row(frame_area).contains(position)
            || !Modal::area(frame_area).contains(position)
        {
            return close_action(presentation);
        }
        return None;
    }

    if let Some(index) = card_at(slots, mouse.column, mouse.row) {
        return Some(Action::FocusAndSelect(index));
    }
    if layout.chart.contains(position) {
        return Some(Action::SelectChart(0));
    }
    None
}
