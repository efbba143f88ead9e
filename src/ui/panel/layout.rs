//! Screen regions of the panel
//!
//! Shared by the renderer and mouse hit-testing so both agree on where each
//! card and the chart are.

use crate::consts::cli_consts::ui::{CARD_COLUMNS, CARD_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Narrowest a card column may get before the grid drops a column
const MIN_CARD_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub header: Rect,
    pub cards: Rect,
    pub chart: Rect,
    pub logs: Rect,
    pub footer: Rect,
}

impl PanelLayout {
    pub fn new(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Fill(1),
                Constraint::Percentage(35),
                Constraint::Length(2),
            ])
            .margin(1)
            .split(area);

        let bottom_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[2]);

        Self {
            header: main_chunks[0],
            cards: main_chunks[1],
            chart: bottom_chunks[0],
            logs: bottom_chunks[1],
            footer: main_chunks[3],
        }
    }
}

/// Where one card is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub area: Rect,
}

/// Lay out up to `count` cards in `area`, scrolled so `focused` is visible.
pub fn card_slots(area: Rect, count: usize, focused: usize) -> Vec<CardSlot> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let columns = ((area.width / MIN_CARD_WIDTH) as usize).clamp(1, CARD_COLUMNS);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let focused_row = focused.min(count - 1) / columns;
    let first_row = (focused_row + 1).saturating_sub(visible_rows);

    let column_width = area.width / columns as u16;
    let card_height = CARD_HEIGHT.min(area.height);

    let mut slots = Vec::new();
    for visible_row in 0..visible_rows {
        for column in 0..columns {
            let index = (first_row + visible_row) * columns + column;
            if index >= count {
                return slots;
            }
            let x = area.x + column as u16 * column_width;
            // Last column absorbs the rounding remainder.
            let width = if column + 1 == columns {
                area.right() - x
            } else {
                column_width
            };
            slots.push(CardSlot {
                index,
                area: Rect::new(x, area.y + visible_row as u16 * CARD_HEIGHT, width, card_height),
            });
        }
    }
    slots
}

/// Index of the card drawn under the given cell, if any.
pub fn card_at(slots: &[CardSlot], column: u16, row: u16) -> Option<usize> {
    slots
        .iter()
        .find(|slot| slot.area.contains(Position::new(column, row)))
        .map(|slot| slot.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_cards_per_row() {
        let slots = card_slots(Rect::new(0, 0, 90, 21), 5, 0);
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].area, Rect::new(0, 0, 30, 7));
        assert_eq!(slots[2].area, Rect::new(60, 0, 30, 7));
        assert_eq!(slots[3].area, Rect::new(0, 7, 30, 7));
    }

    #[test]
    fn test_narrow_area_drops_columns() {
        let slots = card_slots(Rect::new(0, 0, 50, 21), 4, 0);
        assert_eq!(slots[1].area.x, 25);
        assert_eq!(slots[2].area.y, 7);
    }

    #[test]
    fn test_scrolls_to_keep_focus_visible() {
        // Two visible rows, focus on the fourth row.
        let slots = card_slots(Rect::new(0, 0, 90, 14), 12, 10);
        assert_eq!(slots.first().map(|s| s.index), Some(6));
        assert!(slots.iter().any(|s| s.index == 10));
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn test_hit_testing() {
        let slots = card_slots(Rect::new(2, 3, 90, 21), 4, 0);
        assert_eq!(card_at(&slots, 2, 3), Some(0));
        assert_eq!(card_at(&slots, 65, 5), Some(2));
        assert_eq!(card_at(&slots, 40, 12), None);
        assert_eq!(card_at(&slots, 0, 0), None);
    }

    #[test]
    fn test_no_slots_without_records() {
        assert!(card_slots(Rect::new(0, 0, 90, 21), 0, 0).is_empty());
    }
}
